//! Allowance plan model
//!
//! A plan is the income for a period and how much of it is assigned to each
//! category. Plans are validated when built and never mutated afterwards;
//! changing the plan means building a new one.

use std::collections::BTreeMap;

use super::{Amount, Category, ValidationError};

/// Income and its allocation across categories
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Plan {
    income: Amount,
    allocation: BTreeMap<Category, Amount>,
}

impl Plan {
    /// Build a plan from user input
    ///
    /// Only canonical categories are accepted.
    pub fn new(
        income: Amount,
        allocation: BTreeMap<Category, Amount>,
    ) -> Result<Self, ValidationError> {
        if let Some(category) = allocation.keys().find(|c| !c.is_canonical()) {
            return Err(ValidationError::UnknownCategory(category.to_string()));
        }
        Self::restore(income, allocation)
    }

    /// Rebuild a plan read back from storage
    ///
    /// Non-canonical categories are tolerated; amounts and the allocation
    /// total are checked the same way as [`Plan::new`].
    pub fn restore(
        income: Amount,
        allocation: BTreeMap<Category, Amount>,
    ) -> Result<Self, ValidationError> {
        if !income.is_finite() {
            return Err(ValidationError::NonFiniteAmount);
        }
        if income.is_negative() {
            return Err(ValidationError::NegativeIncome);
        }

        for amount in allocation.values() {
            if !amount.is_finite() {
                return Err(ValidationError::NonFiniteAmount);
            }
            if amount.is_negative() {
                return Err(ValidationError::NegativeAllocation);
            }
        }

        let allocated: Amount = allocation.values().sum();
        if allocated.exceeds(income) {
            return Err(ValidationError::OverAllocated { allocated, income });
        }

        Ok(Self { income, allocation })
    }

    /// A plan with no income and nothing allocated
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn income(&self) -> Amount {
        self.income
    }

    pub fn allocation(&self) -> &BTreeMap<Category, Amount> {
        &self.allocation
    }

    /// Sum of all allocated amounts
    pub fn allocated(&self) -> Amount {
        self.allocation.values().sum()
    }

    /// Income not assigned to any category
    pub fn unallocated(&self) -> Amount {
        self.income - self.allocated()
    }

    /// Planned amount for a category, zero when it has no allocation
    pub fn category_amount(&self, category: &Category) -> Amount {
        self.allocation.get(category).copied().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_zero() && self.allocation.is_empty()
    }
}
