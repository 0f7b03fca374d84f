//! Display formatting for terminal output
//!
//! Plain-text renderings of plans and transactions. The summary report
//! formats itself (see [`crate::reports::AllowanceSummary::format_terminal`]).

pub mod plan;
pub mod transaction;

pub use plan::format_plan_saved;
pub use transaction::{format_transaction_recorded, format_transaction_register};
