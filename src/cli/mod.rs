//! CLI command handlers
//!
//! Argument definitions (clap) and one handler per command. Handlers open
//! the ledger, perform one operation and return the text to print.

pub mod history;
pub mod plan;
pub mod record;
pub mod reset;
pub mod summary;

pub use history::{handle_history_command, HistoryArgs};
pub use plan::{handle_plan_command, PlanArgs};
pub use record::{handle_record_command, RecordArgs};
pub use reset::{handle_reset_command, ResetArgs};
pub use summary::handle_summary_command;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::paths::{AllowancePaths, STORAGE_ENV_VAR};
use crate::error::AllowanceResult;

#[derive(Parser, Debug)]
#[command(
    name = "allowance",
    version,
    about = "Manage a simple allowance plan",
    long_about = "Split an allowance across save, spend, share and need, \
                  record what gets spent, and see what is left in each bucket."
)]
pub struct Cli {
    /// Path to the JSON file where allowance data will be stored
    #[arg(long, global = true, value_name = "PATH", env = STORAGE_ENV_VAR)]
    pub storage: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or replace the allowance plan allocations
    #[command(allow_negative_numbers = true)]
    Plan(PlanArgs),

    /// Record a new transaction for a category
    #[command(allow_negative_numbers = true)]
    Record(RecordArgs),

    /// Show the current plan and progress
    Summary,

    /// List recorded transactions
    History(HistoryArgs),

    /// Remove recorded transactions (optionally the plan too)
    Reset(ResetArgs),
}

/// Run a parsed command line and return its output
pub fn run(cli: Cli) -> AllowanceResult<String> {
    let paths = AllowancePaths::resolve(cli.storage)?;

    match cli.command {
        Commands::Plan(args) => handle_plan_command(&paths, args),
        Commands::Record(args) => handle_record_command(&paths, args),
        Commands::Summary => handle_summary_command(&paths),
        Commands::History(args) => handle_history_command(&paths, args),
        Commands::Reset(args) => handle_reset_command(&paths, args),
    }
}
