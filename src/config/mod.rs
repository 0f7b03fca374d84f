//! Configuration module for the allowance tracker
//!
//! Configuration is an explicit value handed to the ledger; there is no
//! process-wide default path.

pub mod paths;

pub use paths::AllowancePaths;
