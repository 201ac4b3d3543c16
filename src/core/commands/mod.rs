use std::collections::BTreeMap;

mod cd;
mod exit;
mod path;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use path::PathCommand;

use super::parser::Command;
use super::state::ShellState;
use crate::process::ProcessError;

#[derive(Debug)]
pub enum CommandError {
    Empty,
    InvalidArguments(String),
    IoError(std::io::Error),
    ProcessError(ProcessError),
}

impl CommandError {
    /// Empty commands are rejected without printing anything.
    pub fn is_silent(&self) -> bool {
        matches!(self, CommandError::Empty)
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::ProcessError(err) => write!(f, "Process error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// What the engine should do after a builtin ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    Terminate,
}

pub trait Builtin {
    /// `args` excludes the command name.
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Verdict, CommandError>;
}

#[derive(Clone)]
enum BuiltinType {
    Cd(CdCommand),
    Exit(ExitCommand),
    Path(PathCommand),
}

impl Builtin for BuiltinType {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Verdict, CommandError> {
        match self {
            BuiltinType::Cd(cmd) => cmd.execute(args, state),
            BuiltinType::Exit(cmd) => cmd.execute(args, state),
            BuiltinType::Path(cmd) => cmd.execute(args, state),
        }
    }
}

#[derive(Clone)]
pub struct BuiltinDispatcher {
    commands: BTreeMap<&'static str, BuiltinType>,
}

impl Default for BuiltinDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinDispatcher {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", BuiltinType::Cd(CdCommand::new()));
        commands.insert("exit", BuiltinType::Exit(ExitCommand::new()));
        commands.insert("path", BuiltinType::Path(PathCommand::new()));
        Self { commands }
    }

    /// Runs `command` if it names a builtin; `None` means it is external.
    pub fn dispatch(
        &self,
        command: &Command,
        state: &mut ShellState,
    ) -> Option<Result<Verdict, CommandError>> {
        let Some(name) = command.name() else {
            return Some(Err(CommandError::Empty));
        };

        self.commands
            .get(name)
            .map(|builtin| builtin.execute(command.params(), state))
    }
}
