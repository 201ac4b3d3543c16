use super::{prepare, ChildHandle, ForkSpawner, ProcessError, Spawner};
use crate::core::parser::Command;
use crate::core::state::ShellState;

/// Runs non-builtin commands: redirect validation, resolution, spawn.
#[derive(Debug, Clone, Default)]
pub struct ExternalExecutor<S = ForkSpawner> {
    spawner: S,
}

impl<S: Spawner> ExternalExecutor<S> {
    pub fn new(spawner: S) -> Self {
        Self { spawner }
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Starts `command` and returns its handle without waiting for it.
    pub fn execute(
        &mut self,
        command: &Command,
        state: &mut ShellState,
    ) -> Result<ChildHandle, ProcessError> {
        let prepared = prepare(command)?;

        let program = state
            .paths()
            .search(prepared.program())
            .ok_or_else(|| ProcessError::CommandNotFound(prepared.program().to_string()))?;
        state.trace(format_args!(
            "resolved {} to {}",
            prepared.program(),
            program.display()
        ));

        match self.spawner.spawn(&program, &prepared) {
            Ok(child) => {
                state.trace(format_args!("spawned pid {}", child.pid()));
                Ok(child)
            }
            Err(e) => {
                if e.is_resource_fault() {
                    state.mark_failed();
                }
                Err(e)
            }
        }
    }

    pub fn wait(&mut self, child: ChildHandle) -> Result<(), ProcessError> {
        self.spawner.wait(child)
    }
}
