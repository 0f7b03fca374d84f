//! Reports module for the allowance tracker

pub mod summary;

pub use summary::{AllowanceSummary, CategorySummaryRow};
