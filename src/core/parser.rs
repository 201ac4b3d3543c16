//! Splits raw input lines into command groups.
//!
//! There is no quoting, escaping or comment syntax: `&` always separates
//! commands and whitespace always separates arguments.

pub const GROUP_SEPARATOR: char = '&';

/// One program invocation. Argument 0 is the program name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    args: Vec<String>,
}

impl Command {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn name(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Arguments after the program name.
    pub fn params(&self) -> &[String] {
        self.args.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Command {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// The commands of one input line, started left to right and run concurrently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandGroup {
    commands: Vec<Command>,
}

impl CommandGroup {
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }
}

impl FromIterator<Command> for CommandGroup {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

pub fn parse_line(line: &str) -> CommandGroup {
    line.split(GROUP_SEPARATOR)
        .map(|segment| Command::new(tokenize(segment)))
        .collect()
}
