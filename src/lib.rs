//! Allowance - plan an allowance and track what gets spent
//!
//! A user sets an income, splits it across a few fixed categories (save,
//! spend, share, need), records transactions against those categories and
//! checks planned vs. spent amounts.
//!
//! # Architecture
//!
//! - `config`: Storage path resolution
//! - `error`: Custom error types
//! - `models`: Amounts, categories, plans, transactions and state
//! - `storage`: JSON file storage
//! - `services`: The [`Ledger`] façade, the only mutator of state
//! - `reports`: Planned/spent/remaining summary
//! - `display`: Terminal formatting
//! - `cli`: Command-line argument parsing and handlers
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,no_run
//! use std::collections::BTreeMap;
//! use allowance::models::{Amount, Category};
//! use allowance::Ledger;
//!
//! # fn main() -> allowance::error::AllowanceResult<()> {
//! let mut ledger = Ledger::load("/tmp/allowance.json")?;
//! let mut allocation = BTreeMap::new();
//! allocation.insert(Category::Save, Amount::new(5.0));
//! ledger.set_plan(Amount::new(20.0), allocation)?;
//! ledger.add_transaction(Category::Spend, Amount::new(4.0), "Snacks")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{AllowanceError, AllowanceResult};
pub use services::Ledger;
