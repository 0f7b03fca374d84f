//! `summary` command

use crate::config::AllowancePaths;
use crate::error::AllowanceResult;
use crate::services::Ledger;

pub fn handle_summary_command(paths: &AllowancePaths) -> AllowanceResult<String> {
    let ledger = Ledger::open(paths)?;
    Ok(ledger.summary().format_terminal())
}
