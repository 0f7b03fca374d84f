//! Storage layer for the allowance tracker
//!
//! The whole [`State`] lives in one JSON file. Loading a missing file yields
//! an empty state; saving rewrites the file in full.

pub mod file_io;
pub mod records;

pub use file_io::{read_json, write_json_atomic};
pub use records::{PlanRecord, StateRecord, TransactionRecord};

use std::path::Path;

use tracing::debug;

use crate::error::{AllowanceError, AllowanceResult};
use crate::models::State;

/// Load a previously saved state, or an empty one if `path` does not exist
pub fn load_state(path: &Path) -> AllowanceResult<State> {
    let Some(record) = read_json::<StateRecord, _>(path)? else {
        debug!(path = %path.display(), "no data file, starting empty");
        return Ok(State::empty());
    };

    let state = record.into_state().map_err(|e| {
        AllowanceError::Storage(format!("Invalid data in {}: {}", path.display(), e))
    })?;

    debug!(
        path = %path.display(),
        transactions = state.transactions.len(),
        "loaded allowance state"
    );
    Ok(state)
}

/// Persist `state` to `path`, replacing whatever was there
pub fn save_state(state: &State, path: &Path) -> AllowanceResult<()> {
    write_json_atomic(path, &StateRecord::from(state))?;
    debug!(
        path = %path.display(),
        transactions = state.transactions.len(),
        "saved allowance state"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Category, Plan, Transaction};
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;

    fn sample_state() -> State {
        let allocation: BTreeMap<_, _> = [
            (Category::Save, Amount::new(5.0)),
            (Category::Spend, Amount::new(10.0)),
            (Category::Share, Amount::new(3.0)),
        ]
        .into_iter()
        .collect();
        let plan = Plan::new(Amount::new(20.0), allocation).unwrap();

        State::new(
            plan,
            vec![
                Transaction::new(Category::Spend, Amount::new(4.0), "Snacks").unwrap(),
                Transaction::new(Category::Save, Amount::new(2.0), "").unwrap(),
            ],
        )
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let state = load_state(&temp_dir.path().join("missing.json")).unwrap();
        assert_eq!(state, State::empty());
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        let state = sample_state();

        save_state(&state, &path).unwrap();
        let loaded = load_state(&path).unwrap();

        assert_eq!(loaded, state);
    }

    #[test]
    fn test_file_layout() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        save_state(&sample_state(), &path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(raw["plan"]["income"], 20.0);
        assert_eq!(raw["plan"]["allocation"]["share"], 3.0);
        assert_eq!(raw["transactions"][0]["category"], "spend");
        assert_eq!(raw["transactions"][0]["description"], "Snacks");
        assert!(raw["transactions"][1]["timestamp"].is_string());
    }

    #[test]
    fn test_save_overwrites_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");

        save_state(&sample_state(), &path).unwrap();
        save_state(&State::empty(), &path).unwrap();

        assert_eq!(load_state(&path).unwrap(), State::empty());
    }

    #[test]
    fn test_malformed_json_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(load_state(&path).unwrap_err().is_storage());
    }

    #[test]
    fn test_invalid_data_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        fs::write(
            &path,
            r#"{"plan": {"income": 1, "allocation": {"save": 2}}, "transactions": []}"#,
        )
        .unwrap();

        let err = load_state(&path).unwrap_err();
        assert!(err.is_storage());
        assert!(err.to_string().contains("cannot exceed"));
    }

    #[test]
    fn test_loads_python_style_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        fs::write(
            &path,
            r#"{
  "plan": {"income": 20.0, "allocation": {"save": 5.0}},
  "transactions": [
    {"category": "save", "amount": 2.0, "description": "", "timestamp": "2024-05-01T09:15:42.123456"}
  ]
}"#,
        )
        .unwrap();

        let state = load_state(&path).unwrap();
        assert_eq!(state.spent_for(&Category::Save), Amount::new(2.0));
        assert_eq!(
            records::format_timestamp(state.transactions[0].timestamp()),
            "2024-05-01T09:15:42.123456Z"
        );
    }
}
