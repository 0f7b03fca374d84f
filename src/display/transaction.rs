//! Transaction display formatting
//!
//! Confirmation lines and a simple register of recorded transactions.

use crate::models::Transaction;

/// Confirmation shown after a transaction is recorded
pub fn format_transaction_recorded(txn: &Transaction) -> String {
    let mut output = format!("Recorded {} to {}.", txn.amount(), txn.category());
    if !txn.description().is_empty() {
        output.push_str(&format!(" Note: {}", txn.description()));
    }
    output.push('\n');
    output
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "{} {:8} {:>10}  {}",
        txn.timestamp().format("%Y-%m-%d %H:%M"),
        txn.category(),
        txn.amount(),
        txn.description()
    )
    .trim_end()
    .to_string()
}

/// Format a list of transactions as a register, in the order given
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions recorded yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:16} {:8} {:>10}  {}\n",
        "Date", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(50));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}
