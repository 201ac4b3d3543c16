//! Turns a parsed command into the argument vector a child will exec.

use std::ffi::CString;
use std::os::raw::c_char;
use std::path::PathBuf;
use std::ptr;

use super::ProcessError;
use crate::core::parser::Command;

pub const REDIRECT_OPERATOR: &str = ">";

/// A validated command ready to spawn. The source [`Command`] is left as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCommand {
    argv: Vec<String>,
    redirect: Option<PathBuf>,
}

impl PreparedCommand {
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn redirect(&self) -> Option<&PathBuf> {
        self.redirect.as_ref()
    }
}

/// Checks redirection syntax and strips `> target` off the argument list.
///
/// Only the first operator counts. It must not be the first token and must be
/// followed by exactly one token, the target file.
pub fn prepare(command: &Command) -> Result<PreparedCommand, ProcessError> {
    let args = command.args();
    if args.is_empty() {
        return Err(ProcessError::InvalidArgument(
            "empty command".to_string(),
        ));
    }

    let Some(index) = args.iter().position(|arg| arg == REDIRECT_OPERATOR) else {
        return Ok(PreparedCommand {
            argv: args.to_vec(),
            redirect: None,
        });
    };

    if index == 0 {
        return Err(ProcessError::MalformedRedirect(
            "redirection without a command".to_string(),
        ));
    }

    let targets = &args[index + 1..];
    if targets.len() != 1 {
        return Err(ProcessError::MalformedRedirect(format!(
            "expected exactly one target after '{}', found {}",
            REDIRECT_OPERATOR,
            targets.len()
        )));
    }

    Ok(PreparedCommand {
        argv: args[..index].to_vec(),
        redirect: Some(PathBuf::from(&targets[0])),
    })
}

/// NUL-terminated argument vector in the layout `execv` expects.
///
/// The pointer table always ends with a null entry.
pub struct ExecArgv {
    _strings: Vec<CString>,
    pointers: Vec<*const c_char>,
}

impl ExecArgv {
    pub fn new(args: &[String]) -> Result<Self, ProcessError> {
        let strings = args
            .iter()
            .map(|arg| {
                CString::new(arg.as_bytes())
                    .map_err(|_| ProcessError::InvalidArgument(arg.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let pointers = strings
            .iter()
            .map(|s| s.as_ptr())
            .chain(std::iter::once(ptr::null()))
            .collect();

        Ok(Self {
            _strings: strings,
            pointers,
        })
    }

    pub fn as_ptr(&self) -> *const *const c_char {
        self.pointers.as_ptr()
    }
}
