use std::io::{self, Write};

use crate::core::config::ConfigError;

/// The one line written to stderr for every detected fault.
pub const ERROR_MESSAGE: &str = "An error has occurred\n";

pub fn print_error() {
    let mut stderr = io::stderr().lock();
    let _ = stderr.write_all(ERROR_MESSAGE.as_bytes());
    let _ = stderr.flush();
}

#[derive(Debug)]
pub enum ShellError {
    Io(std::io::Error),
    FlagError(String),
    TooManyArguments(usize),
    BatchFile(String, std::io::Error),
    ConfigError(ConfigError),
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ConfigError> for ShellError {
    fn from(err: ConfigError) -> Self {
        ShellError::ConfigError(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
            ShellError::TooManyArguments(n) => {
                write!(f, "expected at most one batch file, got {}", n)
            }
            ShellError::BatchFile(path, e) => write!(f, "cannot open batch file {}: {}", path, e),
            ShellError::ConfigError(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl std::error::Error for ShellError {}
