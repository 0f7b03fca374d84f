//! Core data models for the allowance tracker
//!
//! Plans, transactions and the state that groups them, plus the amount and
//! category types they are built from. Every model validates on construction.

pub mod amount;
pub mod category;
pub mod plan;
pub mod state;
pub mod transaction;

pub use amount::{Amount, AMOUNT_EPSILON};
pub use category::Category;
pub use plan::Plan;
pub use state::State;
pub use transaction::Transaction;

use std::fmt;

/// Why a plan or transaction could not be built
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NegativeIncome,
    NegativeAllocation,
    NegativeAmount,
    NonFiniteAmount,
    InvalidAmount(String),
    UnknownCategory(String),
    EmptyCategory,
    OverAllocated { allocated: Amount, income: Amount },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeIncome => write!(f, "Income must be non-negative"),
            Self::NegativeAllocation => write!(f, "Allocated amounts must be non-negative"),
            Self::NegativeAmount => write!(f, "Transaction amount must be non-negative"),
            Self::NonFiniteAmount => write!(f, "Amounts must be finite numbers"),
            Self::InvalidAmount(s) => write!(f, "Invalid amount: {}", s),
            Self::UnknownCategory(name) => write!(f, "Unknown category: {}", name),
            Self::EmptyCategory => write!(f, "Category name cannot be empty"),
            Self::OverAllocated { allocated, income } => write!(
                f,
                "Allocated amounts ({}) cannot exceed the total allowance income ({})",
                allocated, income
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
