use crate::error::{Result, WeaveError};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Empties an output directory before anything is written into it.
pub struct DirectoryCleaner;

impl DirectoryCleaner {
    /// Removes everything under `dir` and leaves it existing and empty.
    pub fn clean_directory(dir: &Path) -> Result<()> {
        if dir.exists() {
            debug!("Cleaning output directory {}", dir.display());
            fs::remove_dir_all(dir).map_err(|e| WeaveError::io(dir, e))?;
        }
        fs::create_dir_all(dir).map_err(|e| WeaveError::io(dir, e))
    }
}
