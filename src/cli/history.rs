//! `history` command

use clap::builder::RangedU64ValueParser;
use clap::Args;

use crate::config::AllowancePaths;
use crate::display::format_transaction_register;
use crate::error::AllowanceResult;
use crate::services::Ledger;

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Only show the most recent N transactions
    #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,
}

pub fn handle_history_command(
    paths: &AllowancePaths,
    args: HistoryArgs,
) -> AllowanceResult<String> {
    let ledger = Ledger::open(paths)?;
    let transactions = ledger.transactions();

    let shown = match args.limit {
        Some(limit) => &transactions[transactions.len().saturating_sub(limit)..],
        None => transactions,
    };

    Ok(format_transaction_register(shown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Category};
    use tempfile::TempDir;

    #[test]
    fn test_limit_keeps_most_recent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AllowancePaths::with_storage_file(temp_dir.path().join("data.json"));

        let mut ledger = Ledger::open(&paths).unwrap();
        for (i, category) in Category::CANONICAL.iter().enumerate() {
            ledger
                .add_transaction(category.clone(), Amount::new(i as f64), format!("item{}", i))
                .unwrap();
        }

        let output = handle_history_command(&paths, HistoryArgs { limit: Some(2) }).unwrap();
        assert!(!output.contains("item0"));
        assert!(!output.contains("item1"));
        assert!(output.contains("item2"));
        assert!(output.contains("item3"));

        let output = handle_history_command(&paths, HistoryArgs { limit: Some(10) }).unwrap();
        assert!(output.contains("item0"));
    }
}
