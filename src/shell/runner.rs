use crate::core::commands::{BuiltinDispatcher, CommandError, Verdict};
use crate::core::parser::{parse_line, Command, CommandGroup};
use crate::core::state::ShellState;
use crate::error::print_error;
use crate::process::{ChildHandle, ExternalExecutor, ForkSpawner, Spawner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Terminate,
}

enum Step {
    Builtin(Verdict),
    Spawned(ChildHandle),
}

/// Drives one command group and holds the per-line wait barrier.
pub struct GroupRunner<S = ForkSpawner> {
    builtins: BuiltinDispatcher,
    executor: ExternalExecutor<S>,
}

impl Default for GroupRunner<ForkSpawner> {
    fn default() -> Self {
        Self::new(ForkSpawner::new())
    }
}

impl<S: Spawner> GroupRunner<S> {
    pub fn new(spawner: S) -> Self {
        Self {
            builtins: BuiltinDispatcher::new(),
            executor: ExternalExecutor::new(spawner),
        }
    }

    pub fn spawner(&self) -> &S {
        self.executor.spawner()
    }

    pub fn run_line(&mut self, line: &str, state: &mut ShellState) -> LineOutcome {
        self.run_group(&parse_line(line), state)
    }

    /// Starts every command in order, then waits for the children it spawned.
    ///
    /// An `exit` stops the loop; children already started are still awaited.
    pub fn run_group(&mut self, group: &CommandGroup, state: &mut ShellState) -> LineOutcome {
        let mut children = Vec::new();
        let mut outcome = LineOutcome::Continue;

        for command in group.iter() {
            match self.run_command(command, state) {
                Ok(Step::Builtin(Verdict::Terminate)) => {
                    outcome = LineOutcome::Terminate;
                    break;
                }
                Ok(Step::Builtin(Verdict::Continue)) => {}
                Ok(Step::Spawned(child)) => children.push(child),
                Err(e) => report(&e, state),
            }
        }

        self.wait_all(children, state);
        outcome
    }

    fn run_command(
        &mut self,
        command: &Command,
        state: &mut ShellState,
    ) -> Result<Step, CommandError> {
        if let Some(result) = self.builtins.dispatch(command, state) {
            return result.map(Step::Builtin);
        }

        Ok(Step::Spawned(self.executor.execute(command, state)?))
    }

    fn wait_all(&mut self, children: Vec<ChildHandle>, state: &mut ShellState) {
        for child in children {
            if let Err(e) = self.executor.wait(child) {
                state.trace(e);
            }
        }
    }
}

fn report(error: &CommandError, state: &ShellState) {
    state.trace(error);
    if !error.is_silent() {
        print_error();
    }
}
