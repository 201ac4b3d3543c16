use std::{fs, io, path::Path};

use super::{ConfigError, ConfigPaths};
use crate::core::state::Mode;

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    /// Lines to run before the first prompt.
    ///
    /// The default rc file is only read in interactive mode and may be
    /// absent. An explicitly named file is read in any mode and must exist.
    pub fn load_lines(&self, mode: Mode) -> Result<Vec<String>, ConfigError> {
        let Some(path) = self.paths.rc_path.as_deref() else {
            return Ok(Vec::new());
        };

        if self.paths.explicit {
            return self.read_lines(path);
        }

        if mode == Mode::Interactive && path.exists() {
            return self.read_lines(path);
        }

        Ok(Vec::new())
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                ConfigError::ConfigFileNotFound(path.display().to_string())
            }
            _ => e.into(),
        })?;

        Ok(content.lines().filter_map(process_line).collect())
    }
}

fn process_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(line.to_string())
}
