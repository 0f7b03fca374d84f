//! On-disk record shapes
//!
//! The JSON layout is:
//!
//! ```json
//! {
//!   "plan": { "income": 20.0, "allocation": { "save": 5.0 } },
//!   "transactions": [
//!     { "category": "spend", "amount": 4.0, "description": "Snacks",
//!       "timestamp": "2024-03-01T12:00:00.123456Z" }
//!   ]
//! }
//! ```
//!
//! Records are plain serde structs; converting them into models runs the
//! model validation.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Amount, Category, Plan, State, Transaction, ValidationError};

/// Whole data file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateRecord {
    #[serde(default)]
    pub plan: PlanRecord,
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanRecord {
    #[serde(default)]
    pub income: Amount,
    #[serde(default)]
    pub allocation: BTreeMap<String, Amount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub category: String,
    pub amount: Amount,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Failure to turn a record back into a model
#[derive(Debug, Clone, PartialEq)]
pub enum RecordError {
    Invalid(ValidationError),
    Timestamp(String),
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "{}", e),
            Self::Timestamp(s) => write!(f, "Invalid timestamp: {}", s),
        }
    }
}

impl From<ValidationError> for RecordError {
    fn from(err: ValidationError) -> Self {
        Self::Invalid(err)
    }
}

impl From<&State> for StateRecord {
    fn from(state: &State) -> Self {
        Self {
            plan: PlanRecord::from(&state.plan),
            transactions: state.transactions.iter().map(TransactionRecord::from).collect(),
        }
    }
}

impl From<&Plan> for PlanRecord {
    fn from(plan: &Plan) -> Self {
        Self {
            income: plan.income(),
            allocation: plan
                .allocation()
                .iter()
                .map(|(category, amount)| (category.to_string(), *amount))
                .collect(),
        }
    }
}

impl From<&Transaction> for TransactionRecord {
    fn from(txn: &Transaction) -> Self {
        Self {
            category: txn.category().to_string(),
            amount: txn.amount(),
            description: txn.description().to_string(),
            timestamp: Some(format_timestamp(txn.timestamp())),
        }
    }
}

impl StateRecord {
    pub fn into_state(self) -> Result<State, RecordError> {
        let plan = self.plan.into_plan()?;
        let transactions = self
            .transactions
            .into_iter()
            .map(TransactionRecord::into_transaction)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(State::new(plan, transactions))
    }
}

impl PlanRecord {
    pub fn into_plan(self) -> Result<Plan, RecordError> {
        let mut allocation = BTreeMap::new();
        for (name, amount) in self.allocation {
            let category = Category::from_stored(&name)?;
            *allocation.entry(category).or_insert_with(Amount::zero) += amount;
        }
        Ok(Plan::restore(self.income, allocation)?)
    }
}

impl TransactionRecord {
    pub fn into_transaction(self) -> Result<Transaction, RecordError> {
        let category = Category::from_stored(&self.category)?;
        let timestamp = match self.timestamp.as_deref() {
            Some(raw) if !raw.trim().is_empty() => parse_timestamp(raw)?,
            _ => Utc::now(),
        };
        Ok(Transaction::restore(
            category,
            self.amount,
            self.description,
            timestamp,
        )?)
    }
}

/// RFC 3339 in UTC, keeping sub-second precision
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Accepts RFC 3339 with an offset, or a naive ISO-8601 date-time taken as UTC
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RecordError> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|_| RecordError::Timestamp(raw.to_string()))
}
