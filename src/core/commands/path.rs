use super::{Builtin, CommandError, Verdict};
use crate::core::state::ShellState;

/// Replaces the executable search list. Never fails.
#[derive(Clone)]
pub struct PathCommand;

impl Default for PathCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PathCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for PathCommand {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Verdict, CommandError> {
        state.paths_mut().set(args.iter().cloned());
        state.trace(format_args!("path is now {:?}", state.paths().entries()));
        Ok(Verdict::Continue)
    }
}
