//! Ledger service
//!
//! The ledger owns the current [`State`] and the file it came from. Every
//! mutation is validated first, written to disk second, and only then
//! applied in memory, so a failure at either step leaves nothing changed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::AllowancePaths;
use crate::error::AllowanceResult;
use crate::models::{Amount, Category, Plan, State, Transaction};
use crate::reports::AllowanceSummary;
use crate::storage;

/// Runtime owner of the allowance state and its storage path
#[derive(Debug)]
pub struct Ledger {
    state: State,
    storage_path: PathBuf,
}

impl Ledger {
    /// Load the ledger stored at `path`, starting empty if there is no file
    pub fn load(path: impl Into<PathBuf>) -> AllowanceResult<Self> {
        let storage_path = path.into();
        let state = storage::load_state(&storage_path)?;
        Ok(Self {
            state,
            storage_path,
        })
    }

    /// Load the ledger from configured paths
    pub fn open(paths: &AllowancePaths) -> AllowanceResult<Self> {
        Self::load(paths.storage_file())
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn plan(&self) -> &Plan {
        &self.state.plan
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    // === Mutations ===

    /// Replace the plan wholesale; allocations are not merged with the old plan
    pub fn set_plan(
        &mut self,
        income: Amount,
        allocations: BTreeMap<Category, Amount>,
    ) -> AllowanceResult<Plan> {
        let plan = Plan::new(income, allocations)?;

        let mut next = self.state.clone();
        next.plan = plan.clone();
        self.commit(next)?;

        info!(income = %plan.income(), unallocated = %plan.unallocated(), "plan set");
        Ok(plan)
    }

    /// Record a transaction against a canonical category
    pub fn add_transaction(
        &mut self,
        category: Category,
        amount: Amount,
        description: impl Into<String>,
    ) -> AllowanceResult<Transaction> {
        let txn = Transaction::new(category, amount, description)?;

        let mut next = self.state.clone();
        next.transactions.push(txn.clone());
        self.commit(next)?;

        info!(category = %txn.category(), amount = %txn.amount(), "transaction recorded");
        Ok(txn)
    }

    /// Remove every transaction, keeping the plan
    pub fn clear_transactions(&mut self) -> AllowanceResult<()> {
        let mut next = self.state.clone();
        next.transactions.clear();
        self.commit(next)?;

        info!("transactions cleared");
        Ok(())
    }

    /// Clear transactions, and with `everything` also wipe the plan
    pub fn reset(&mut self, everything: bool) -> AllowanceResult<()> {
        self.clear_transactions()?;
        if everything {
            self.set_plan(Amount::zero(), BTreeMap::new())?;
        }
        Ok(())
    }

    fn commit(&mut self, next: State) -> AllowanceResult<()> {
        storage::save_state(&next, &self.storage_path)?;
        self.state = next;
        Ok(())
    }

    // === Reads ===

    pub fn planned_amount(&self, category: &Category) -> Amount {
        self.state.plan.category_amount(category)
    }

    pub fn spent_amount(&self, category: &Category) -> Amount {
        self.state.spent_for(category)
    }

    pub fn remaining_amount(&self, category: &Category) -> Amount {
        self.state.remaining_for(category)
    }

    /// Categories used by the plan or transactions, in report order
    pub fn iter_categories(&self) -> Vec<Category> {
        self.state.categories_in_use()
    }

    /// Planned/spent/remaining per category
    pub fn summary(&self) -> AllowanceSummary {
        AllowanceSummary::from_ledger(self)
    }
}
