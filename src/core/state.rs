use std::fmt;

use super::paths::PathRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Batch,
}

/// Everything the engine mutates between commands. Owned by the shell and
/// handed to each component explicitly.
#[derive(Debug, Clone)]
pub struct ShellState {
    paths: PathRegistry,
    mode: Mode,
    failed: bool,
    debug: bool,
}

impl ShellState {
    pub fn new(mode: Mode) -> Self {
        Self {
            paths: PathRegistry::new(),
            mode,
            failed: false,
            debug: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn paths(&self) -> &PathRegistry {
        &self.paths
    }

    pub fn paths_mut(&mut self) -> &mut PathRegistry {
        &mut self.paths
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_interactive(&self) -> bool {
        self.mode == Mode::Interactive
    }

    pub fn mark_failed(&mut self) {
        self.failed = true;
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    pub fn exit_status(&self) -> u8 {
        u8::from(self.failed)
    }

    pub fn trace(&self, message: impl fmt::Display) {
        if self.debug {
            eprintln!("wish: {}", message);
        }
    }
}
