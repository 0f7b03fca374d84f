//! Transaction model
//!
//! A transaction records money taken out of one category. Transactions are
//! append-only: once recorded they are never edited, only cleared in bulk.

use chrono::{DateTime, Utc};

use super::{Amount, Category, ValidationError};

/// A single recorded expense against a category
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    category: Category,
    amount: Amount,
    description: String,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction stamped with the current time
    pub fn new(
        category: Category,
        amount: Amount,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_timestamp(category, amount, description, Utc::now())
    }

    /// Create a transaction with an explicit timestamp
    pub fn with_timestamp(
        category: Category,
        amount: Amount,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if !category.is_canonical() {
            return Err(ValidationError::UnknownCategory(category.to_string()));
        }
        Self::restore(category, amount, description, timestamp)
    }

    /// Rebuild a transaction read back from storage
    ///
    /// Tolerates non-canonical categories; the amount rule still applies.
    pub fn restore(
        category: Category,
        amount: Amount,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::NonFiniteAmount);
        }
        if amount.is_negative() {
            return Err(ValidationError::NegativeAmount);
        }

        Ok(Self {
            category,
            amount,
            description: description.into(),
            timestamp,
        })
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_transaction() {
        let before = Utc::now();
        let txn = Transaction::new(Category::Spend, Amount::new(4.0), "Snacks").unwrap();

        assert_eq!(txn.category(), &Category::Spend);
        assert_eq!(txn.amount(), Amount::new(4.0));
        assert_eq!(txn.description(), "Snacks");
        assert!(txn.timestamp() >= before);
    }

    #[test]
    fn test_explicit_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let txn = Transaction::with_timestamp(Category::Save, Amount::new(1.0), "", ts).unwrap();
        assert_eq!(txn.timestamp(), ts);
        assert_eq!(txn.description(), "");
    }

    #[test]
    fn test_zero_amount_allowed() {
        assert!(Transaction::new(Category::Need, Amount::zero(), "").is_ok());
    }

    #[test]
    fn test_negative_amount_fails() {
        let err = Transaction::new(Category::Spend, Amount::new(-0.5), "").unwrap_err();
        assert_eq!(err, ValidationError::NegativeAmount);
    }

    #[test]
    fn test_unknown_category_fails() {
        let err =
            Transaction::new(Category::Other("games".into()), Amount::new(1.0), "").unwrap_err();
        assert_eq!(err, ValidationError::UnknownCategory("games".into()));
    }

    #[test]
    fn test_restore_tolerates_unknown_category() {
        let txn = Transaction::restore(
            Category::Other("games".into()),
            Amount::new(1.0),
            "arcade",
            Utc::now(),
        )
        .unwrap();
        assert_eq!(txn.category(), &Category::Other("games".into()));
    }
}
