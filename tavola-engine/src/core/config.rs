use std::path::{Path, PathBuf};

/// Engine configuration
///
/// The core has no env-driven behavior beyond where the store file lives.
///
/// | Environment variable | Default | Meaning |
/// |----------------------|---------|---------|
/// | `TAVOLA_WORK_DIR` | `.tavola` | Directory holding the store file |
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the store file and any future engine state
    pub work_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var_os("TAVOLA_WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".tavola")),
        }
    }

    /// Use an explicit working directory (embedders pick their own)
    pub fn with_work_dir(work_dir: impl AsRef<Path>) -> Self {
        Self {
            work_dir: work_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the redb store file
    pub fn store_path(&self) -> PathBuf {
        self.work_dir.join("tavola.redb")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
