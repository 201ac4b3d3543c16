use std::fmt;

mod loader;
mod paths;

use loader::ConfigLoader;
pub use paths::ConfigPaths;

use super::state::Mode;

/// Startup file handling (`~/.wishrc` or `--config <file>`).
pub struct Config {
    paths: ConfigPaths,
}

impl Config {
    pub fn new(explicit: Option<&str>) -> Self {
        Config {
            paths: ConfigPaths::new(explicit),
        }
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    pub fn startup_lines(&self, mode: Mode) -> Result<Vec<String>, ConfigError> {
        ConfigLoader::new(&self.paths).load_lines(mode)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ConfigFileNotFound(String),
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConfigFileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
