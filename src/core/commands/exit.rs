use super::{Builtin, CommandError, Verdict};
use crate::core::state::ShellState;

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for ExitCommand {
    fn execute(&self, args: &[String], _state: &mut ShellState) -> Result<Verdict, CommandError> {
        if !args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "exit takes no arguments".to_string(),
            ));
        }
        Ok(Verdict::Terminate)
    }
}
