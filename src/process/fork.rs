use std::ffi::CString;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use super::prepare::ExecArgv;
use super::{ChildHandle, PreparedCommand, ProcessError, Spawner};
use crate::error::ERROR_MESSAGE;

/// Spawns children with `fork` + `execv`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForkSpawner;

impl ForkSpawner {
    pub fn new() -> Self {
        Self
    }
}

/// Everything the child needs, allocated before `fork` so the child side
/// only makes raw system calls.
struct ChildImage {
    program: CString,
    argv: ExecArgv,
    redirect: Option<CString>,
}

impl ChildImage {
    fn new(program: &Path, command: &PreparedCommand) -> Result<Self, ProcessError> {
        let program = path_to_cstring(program)?;
        let argv = ExecArgv::new(command.argv())?;
        let redirect = command.redirect().map(|p| path_to_cstring(p)).transpose()?;

        Ok(Self {
            program,
            argv,
            redirect,
        })
    }
}

fn path_to_cstring(path: &Path) -> Result<CString, ProcessError> {
    CString::new(path.as_os_str().as_bytes())
        .map_err(|_| ProcessError::InvalidArgument(path.to_string_lossy().into_owned()))
}

impl Spawner for ForkSpawner {
    fn spawn(
        &mut self,
        program: &Path,
        command: &PreparedCommand,
    ) -> Result<ChildHandle, ProcessError> {
        let image = ChildImage::new(program, command)?;

        // Anything still buffered would otherwise be written twice.
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();

        // SAFETY: the child branch only calls async-signal-safe functions on
        // memory prepared before the fork, then execs or exits.
        match unsafe { libc::fork() } {
            -1 => Err(ProcessError::SpawnFailed(io::Error::last_os_error())),
            0 => child_entry(&image),
            pid => Ok(ChildHandle::from_pid(pid)),
        }
    }

    fn wait(&mut self, child: ChildHandle) -> Result<(), ProcessError> {
        let mut status: libc::c_int = 0;
        loop {
            // SAFETY: `status` is a valid out-pointer for the call.
            let rc = unsafe { libc::waitpid(child.pid(), &mut status, 0) };
            if rc != -1 {
                return Ok(());
            }

            let err = io::Error::last_os_error();
            match err.raw_os_error() {
                Some(libc::EINTR) => continue,
                // Already reaped.
                Some(libc::ECHILD) => return Ok(()),
                _ => return Err(ProcessError::WaitFailed(err)),
            }
        }
    }
}

/// Runs inside the forked child and never returns to the caller.
fn child_entry(image: &ChildImage) -> ! {
    // SAFETY: raw system calls on NUL-terminated buffers owned by `image`.
    unsafe {
        if let Some(target) = &image.redirect {
            let fd = libc::open(
                target.as_ptr(),
                libc::O_WRONLY | libc::O_CREAT | libc::O_TRUNC,
                0o666 as libc::c_uint,
            );
            if fd == -1 {
                child_fail();
            }
            if libc::dup2(fd, libc::STDOUT_FILENO) == -1
                || libc::dup2(fd, libc::STDERR_FILENO) == -1
            {
                child_fail();
            }
            if fd > libc::STDERR_FILENO {
                libc::close(fd);
            }
        }

        libc::execv(image.program.as_ptr(), image.argv.as_ptr());
    }
    child_fail()
}

fn child_fail() -> ! {
    // SAFETY: write(2) and _exit(2) are async-signal-safe.
    unsafe {
        libc::write(
            libc::STDERR_FILENO,
            ERROR_MESSAGE.as_ptr().cast(),
            ERROR_MESSAGE.len(),
        );
        libc::_exit(1)
    }
}
