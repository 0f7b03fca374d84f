//! Path management for the allowance tracker
//!
//! ## Path Resolution Order
//!
//! 1. An explicit path (the `--storage` flag, or `ALLOWANCE_STORAGE` which
//!    clap folds into the same flag)
//! 2. `~/.allowance.json` in the user's home directory

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::AllowanceError;

/// File name used inside the home directory
pub const DEFAULT_STORAGE_FILE_NAME: &str = ".allowance.json";

/// Environment variable that overrides the storage location
pub const STORAGE_ENV_VAR: &str = "ALLOWANCE_STORAGE";

/// Locations used by the allowance tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowancePaths {
    storage_file: PathBuf,
}

impl AllowancePaths {
    /// Resolve paths, preferring an explicit storage file when given
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the home directory
    /// cannot be determined.
    pub fn resolve(storage_override: Option<PathBuf>) -> Result<Self, AllowanceError> {
        let storage_file = match storage_override {
            Some(path) => path,
            None => default_storage_file()?,
        };
        Ok(Self { storage_file })
    }

    /// Use a specific storage file (useful for testing)
    pub fn with_storage_file(storage_file: impl Into<PathBuf>) -> Self {
        Self {
            storage_file: storage_file.into(),
        }
    }

    /// The JSON file holding the plan and transactions
    pub fn storage_file(&self) -> &Path {
        &self.storage_file
    }
}

/// `~/.allowance.json`
pub fn default_storage_file() -> Result<PathBuf, AllowanceError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| AllowanceError::Config("Could not determine home directory".into()))?;
    Ok(dirs.home_dir().join(DEFAULT_STORAGE_FILE_NAME))
}
