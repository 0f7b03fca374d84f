//! Allowance Summary Report
//!
//! Planned vs. spent for every category in use, plus income and what is
//! still unallocated.

use crate::models::{Amount, Category};
use crate::services::Ledger;

/// A row in the summary for a single category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummaryRow {
    pub category: Category,
    /// Amount allocated by the plan
    pub planned: Amount,
    /// Sum of recorded transactions
    pub spent: Amount,
    /// Planned minus spent
    pub remaining: Amount,
}

impl CategorySummaryRow {
    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative() && !self.remaining.is_zero()
    }
}

/// Allowance Summary Report
#[derive(Debug, Clone, PartialEq)]
pub struct AllowanceSummary {
    pub income: Amount,
    pub unallocated: Amount,
    pub rows: Vec<CategorySummaryRow>,
    pub total_spent: Amount,
    pub transaction_count: usize,
}

impl AllowanceSummary {
    /// Build the summary from a ledger's current state
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let rows: Vec<CategorySummaryRow> = ledger
            .iter_categories()
            .into_iter()
            .map(|category| CategorySummaryRow {
                planned: ledger.planned_amount(&category),
                spent: ledger.spent_amount(&category),
                remaining: ledger.remaining_amount(&category),
                category,
            })
            .collect();

        let plan = ledger.plan();
        Self {
            income: plan.income(),
            unallocated: plan.unallocated(),
            total_spent: ledger.state().total_spent(),
            transaction_count: ledger.transactions().len(),
            rows,
        }
    }

    /// Categories where more was spent than planned
    pub fn overspent(&self) -> impl Iterator<Item = &CategorySummaryRow> {
        self.rows.iter().filter(|row| row.is_overspent())
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Current allowance summary:\n");
        output.push_str(&format!("  Income: {}\n", self.income));

        for row in &self.rows {
            output.push_str(&format!(
                "  {:<8} Planned: {:>6} | Spent: {:>6} | Remaining: {:>6}{}\n",
                row.category.title(),
                row.planned,
                row.spent,
                row.remaining,
                if row.is_overspent() { " *" } else { "" }
            ));
        }

        if self.unallocated.value() > 0.0 && !self.unallocated.is_zero() {
            output.push_str(&format!("  Unallocated funds: {}\n", self.unallocated));
        }

        if self.transaction_count == 0 {
            output.push_str("  No transactions recorded yet.\n");
        }

        if self.overspent().next().is_some() {
            output.push_str("  * overspent\n");
        }

        output
    }
}
