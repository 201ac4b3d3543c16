use super::{Builtin, CommandError, Verdict};
use crate::core::state::ShellState;
use std::env;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for CdCommand {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Verdict, CommandError> {
        let [target] = args else {
            return Err(CommandError::InvalidArguments(format!(
                "cd takes exactly one directory, got {}",
                args.len()
            )));
        };

        env::set_current_dir(target)?;
        state.trace(format_args!("cwd is now {}", target));
        Ok(Verdict::Continue)
    }
}
