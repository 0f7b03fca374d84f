//! Allowance state
//!
//! The unit of persistence: one plan plus the transactions recorded against
//! it, in the order they were recorded.

use std::collections::BTreeSet;

use super::{Amount, Category, Plan, Transaction};

/// A plan and its transaction history
#[derive(Debug, Clone, PartialEq, Default)]
pub struct State {
    pub plan: Plan,
    pub transactions: Vec<Transaction>,
}

impl State {
    pub fn new(plan: Plan, transactions: Vec<Transaction>) -> Self {
        Self { plan, transactions }
    }

    /// Empty plan, no transactions
    pub fn empty() -> Self {
        Self::default()
    }

    /// Transactions recorded against a category, in insertion order
    pub fn by_category<'a>(
        &'a self,
        category: &'a Category,
    ) -> impl Iterator<Item = &'a Transaction> + 'a {
        self.transactions
            .iter()
            .filter(move |txn| txn.category() == category)
    }

    /// Total recorded against a category
    pub fn spent_for(&self, category: &Category) -> Amount {
        self.by_category(category).map(Transaction::amount).sum()
    }

    /// Planned minus spent; negative when overspent
    pub fn remaining_for(&self, category: &Category) -> Amount {
        self.plan.category_amount(category) - self.spent_for(category)
    }

    /// Total recorded across all categories
    pub fn total_spent(&self) -> Amount {
        self.transactions.iter().map(Transaction::amount).sum()
    }

    /// Categories that appear in the plan or in any transaction
    ///
    /// Canonical categories come first in their fixed order, then any other
    /// names alphabetically. When nothing is in use the full canonical set is
    /// returned so reports always show the standard buckets.
    pub fn categories_in_use(&self) -> Vec<Category> {
        let used: BTreeSet<Category> = self
            .plan
            .allocation()
            .keys()
            .cloned()
            .chain(self.transactions.iter().map(|txn| txn.category().clone()))
            .collect();

        if used.is_empty() {
            return Category::CANONICAL.to_vec();
        }

        used.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn txn(category: Category, amount: f64) -> Transaction {
        Transaction::restore(category, Amount::new(amount), "", chrono::Utc::now()).unwrap()
    }

    fn plan(entries: &[(Category, f64)], income: f64) -> Plan {
        let allocation: BTreeMap<_, _> = entries
            .iter()
            .map(|(c, v)| (c.clone(), Amount::new(*v)))
            .collect();
        Plan::restore(Amount::new(income), allocation).unwrap()
    }

    #[test]
    fn test_spent_and_remaining() {
        let state = State::new(
            plan(&[(Category::Save, 5.0), (Category::Spend, 10.0)], 20.0),
            vec![
                txn(Category::Spend, 4.0),
                txn(Category::Save, 2.0),
                txn(Category::Spend, 1.5),
            ],
        );

        assert_eq!(state.spent_for(&Category::Spend), Amount::new(5.5));
        assert_eq!(state.spent_for(&Category::Need), Amount::zero());
        assert_eq!(state.remaining_for(&Category::Save), Amount::new(3.0));
        assert_eq!(state.total_spent(), Amount::new(7.5));
    }

    #[test]
    fn test_overspending_goes_negative() {
        let state = State::new(
            plan(&[(Category::Spend, 2.0)], 2.0),
            vec![txn(Category::Spend, 5.0)],
        );
        assert_eq!(state.remaining_for(&Category::Spend), Amount::new(-3.0));
    }

    #[test]
    fn test_categories_fallback_to_canonical() {
        assert_eq!(State::empty().categories_in_use(), Category::CANONICAL.to_vec());
    }

    #[test]
    fn test_categories_in_use_ordering() {
        let state = State::new(
            plan(&[(Category::Need, 1.0), (Category::Other("toys".into()), 1.0)], 5.0),
            vec![
                txn(Category::Other("books".into()), 1.0),
                txn(Category::Save, 1.0),
            ],
        );

        assert_eq!(
            state.categories_in_use(),
            vec![
                Category::Save,
                Category::Need,
                Category::Other("books".into()),
                Category::Other("toys".into()),
            ]
        );
    }
}
