use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

pub const DEFAULT_SEARCH_DIR: &str = "/bin";

/// Ordered executable search directories. Earlier entries win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRegistry {
    entries: Vec<String>,
}

impl Default for PathRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PathRegistry {
    pub fn new() -> Self {
        Self {
            entries: vec![DEFAULT_SEARCH_DIR.to_string()],
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn set<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries = paths.into_iter().map(Into::into).collect();
    }

    /// Resolves `name` to something `execv` can run.
    ///
    /// A name that is itself executable relative to the working directory (or
    /// absolute) is returned as-is; otherwise each directory is tried in order.
    pub fn search(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }

        let direct = Path::new(name);
        if is_executable(direct) {
            return Some(direct.to_path_buf());
        }

        self.entries
            .iter()
            .map(|dir| PathBuf::from(format!("{}/{}", dir, name)))
            .find(|candidate| is_executable(candidate))
    }
}

pub fn is_executable(path: &Path) -> bool {
    let Ok(raw) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: `raw` is a valid NUL-terminated string for the duration of the call.
    unsafe { libc::access(raw.as_ptr(), libc::X_OK) == 0 }
}
