//! Service layer for the allowance tracker
//!
//! Front ends (the CLI, tests) go through [`Ledger`] for every read and
//! mutation; nothing else writes the data file.

pub mod ledger;

pub use ledger::Ledger;
