use std::fmt;
use std::path::Path;

pub mod executor;
pub mod fork;
pub mod prepare;

pub use executor::ExternalExecutor;
pub use fork::ForkSpawner;
pub use prepare::{prepare, ExecArgv, PreparedCommand};

#[derive(Debug)]
pub enum ProcessError {
    MalformedRedirect(String),
    CommandNotFound(String),
    InvalidArgument(String),
    SpawnFailed(std::io::Error),
    WaitFailed(std::io::Error),
}

impl ProcessError {
    /// Resource faults mark the whole session as failed.
    pub fn is_resource_fault(&self) -> bool {
        matches!(self, ProcessError::SpawnFailed(_))
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::MalformedRedirect(msg) => write!(f, "Malformed redirection: {}", msg),
            ProcessError::CommandNotFound(cmd) => write!(f, "Command not found: {}", cmd),
            ProcessError::InvalidArgument(arg) => write!(f, "Invalid argument: {:?}", arg),
            ProcessError::SpawnFailed(e) => write!(f, "Spawn failed: {}", e),
            ProcessError::WaitFailed(e) => write!(f, "Wait failed: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}

/// A child started by a [`Spawner`] that has not been waited on yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildHandle {
    pid: libc::pid_t,
}

impl ChildHandle {
    pub fn from_pid(pid: libc::pid_t) -> Self {
        Self { pid }
    }

    pub fn pid(&self) -> libc::pid_t {
        self.pid
    }
}

/// Process creation capability used by the executor and the wait barrier.
pub trait Spawner {
    fn spawn(
        &mut self,
        program: &Path,
        command: &PreparedCommand,
    ) -> Result<ChildHandle, ProcessError>;

    /// Blocks until `child` has terminated. Its exit status is not inspected.
    fn wait(&mut self, child: ChildHandle) -> Result<(), ProcessError>;
}
