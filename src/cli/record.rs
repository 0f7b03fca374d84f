//! `record` command

use clap::Args;

use crate::config::AllowancePaths;
use crate::display::format_transaction_recorded;
use crate::error::AllowanceResult;
use crate::models::{Amount, Category};
use crate::services::Ledger;

#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Category to record against (save, spend, share, need)
    pub category: String,

    /// Amount spent (e.g. "4" or "4.50")
    pub amount: String,

    /// Optional description
    #[arg(num_args = 0..)]
    pub description: Vec<String>,
}

pub fn handle_record_command(paths: &AllowancePaths, args: RecordArgs) -> AllowanceResult<String> {
    let category = Category::parse(&args.category)?;
    let amount = Amount::parse(&args.amount)?;
    let description = args.description.join(" ");

    let mut ledger = Ledger::open(paths)?;
    let txn = ledger.add_transaction(category, amount, description)?;

    Ok(format_transaction_recorded(&txn))
}
