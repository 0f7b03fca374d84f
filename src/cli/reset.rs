//! `reset` command

use clap::Args;

use crate::config::AllowancePaths;
use crate::error::AllowanceResult;
use crate::services::Ledger;

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Remove the saved plan in addition to transactions
    #[arg(long)]
    pub everything: bool,
}

pub fn handle_reset_command(paths: &AllowancePaths, args: ResetArgs) -> AllowanceResult<String> {
    let mut ledger = Ledger::open(paths)?;
    ledger.reset(args.everything)?;

    let message = if args.everything {
        "All transactions and the allowance plan have been removed."
    } else {
        "All recorded transactions have been removed."
    };
    Ok(format!("{}\n", message))
}
