//! Custom error types for the allowance tracker
//!
//! Validation failures come from the models; storage and configuration
//! failures are wrapped here using thiserror.

use thiserror::Error;

use crate::models::ValidationError;

/// The main error type for allowance operations
#[derive(Error, Debug)]
pub enum AllowanceError {
    /// A plan or transaction failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage errors (unreadable, malformed or invalid data file)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AllowanceError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

/// Result type alias for allowance operations
pub type AllowanceResult<T> = Result<T, AllowanceError>;
