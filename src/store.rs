//! Single-slot preference persistence
//!
//! Wayfarer remembers exactly one thing between runs: the user's most
//! recent search and when it happened. The record lives as one JSON value
//! under a fixed key in a small SQLite database in the user's data
//! directory. Saves shallow-merge over whatever is already stored
//! (last-write-wins per field); a corrupt stored value is treated as
//! "no record", never as an error.

use crate::error::{Result, WayfarerError};
use anyhow::Context;
use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// Fixed key under which the single preference record is stored
const PREFERENCES_KEY: &str = "trip_planner";

/// The persisted preference record
///
/// Fields are optional so a partial save merges over the stored record
/// instead of clobbering it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    /// The user's most recent trip request
    #[serde(rename = "lastSearch", default, skip_serializing_if = "Option::is_none")]
    pub last_search: Option<String>,
    /// Epoch milliseconds of the most recent successful search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl PreferenceRecord {
    /// Build a record for a search submitted right now
    pub fn for_search(text: &str) -> Self {
        Self {
            last_search: Some(text.to_string()),
            timestamp: Some(chrono::Utc::now().timestamp_millis()),
        }
    }

    /// True when nothing has been stored yet
    pub fn is_empty(&self) -> bool {
        self.last_search.is_none() && self.timestamp.is_none()
    }
}

/// Storage backend for the preference record
pub struct PreferenceStore {
    db_path: PathBuf,
}

impl PreferenceStore {
    /// Create a new store in the user's data directory
    ///
    /// The path can be overridden with the `WAYFARER_PREFS_DB` environment
    /// variable, which the CLI mirrors from `--prefs-db`.
    pub fn new() -> Result<Self> {
        if let Ok(override_path) = std::env::var("WAYFARER_PREFS_DB") {
            return Self::new_with_path(override_path);
        }

        let proj_dirs = ProjectDirs::from("io", "wayfarer", "wayfarer")
            .ok_or_else(|| WayfarerError::Storage("Could not determine data directory".into()))?;

        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .context("Failed to create data directory")
            .map_err(|e| WayfarerError::Storage(e.to_string()))?;

        Self::new_with_path(data_dir.join("preferences.db"))
    }

    /// Create a store backed by the given database path
    ///
    /// Primarily useful for tests, which point the store at a temporary
    /// directory instead of the user's data dir.
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfarer::store::PreferenceStore;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let store = PreferenceStore::new_with_path(dir.path().join("prefs.db")).unwrap();
    /// assert!(store.load().unwrap().is_empty());
    /// ```
    pub fn new_with_path<P: Into<PathBuf>>(db_path: P) -> Result<Self> {
        let db_path = db_path.into();

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create parent directory for database")
                .map_err(|e| WayfarerError::Storage(e.to_string()))?;
        }

        let store = Self { db_path };
        store.init()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn init(&self) -> Result<()> {
        let conn = self.open()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value JSON NOT NULL
            )",
            [],
        )
        .context("Failed to create preferences table")
        .map_err(|e| WayfarerError::Storage(e.to_string()))?;

        Ok(())
    }

    fn open(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .context("Failed to open preferences database")
            .map_err(|e| WayfarerError::Storage(e.to_string()).into())
    }

    /// Save a record, shallow-merging it over the stored one
    ///
    /// Only fields present in `record` overwrite stored fields; absent
    /// fields keep their previous values. Saving the same record twice is
    /// idempotent.
    pub fn save(&self, record: &PreferenceRecord) -> Result<()> {
        let existing = self.load_raw()?;
        let update = serde_json::to_value(record)
            .map_err(|e| WayfarerError::Storage(format!("Failed to encode record: {}", e)))?;

        let merged = merge_shallow(existing, update);
        let payload = merged.to_string();

        let conn = self.open()?;
        conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![PREFERENCES_KEY, payload],
        )
        .context("Failed to write preference record")
        .map_err(|e| WayfarerError::Storage(e.to_string()))?;

        tracing::debug!("Saved preference record");
        Ok(())
    }

    /// Load the stored record, or an empty record when there is none
    ///
    /// A stored value that fails to deserialize is treated as "no record"
    /// rather than surfaced as an error.
    pub fn load(&self) -> Result<PreferenceRecord> {
        let raw = self.load_raw()?;
        match serde_json::from_value(raw) {
            Ok(record) => Ok(record),
            Err(e) => {
                tracing::warn!("Stored preference record is corrupt, ignoring: {}", e);
                Ok(PreferenceRecord::default())
            }
        }
    }

    /// Read the stored JSON value; missing or unparseable rows become `{}`
    fn load_raw(&self) -> Result<Value> {
        let conn = self.open()?;

        let stored: Option<String> = conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![PREFERENCES_KEY],
                |row| row.get(0),
            )
            .optional()
            .context("Failed to query preference record")
            .map_err(|e| WayfarerError::Storage(e.to_string()))?;

        Ok(stored
            .and_then(|text| serde_json::from_str(&text).ok())
            .filter(Value::is_object)
            .unwrap_or_else(|| Value::Object(Default::default())))
    }
}

/// Shallow-merge `update`'s top-level fields over `existing`
fn merge_shallow(existing: Value, update: Value) -> Value {
    match (existing, update) {
        (Value::Object(mut base), Value::Object(over)) => {
            for (key, value) in over {
                base.insert(key, value);
            }
            Value::Object(base)
        }
        (_, update) => update,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    /// Helper: create a temporary store backed by a temp directory.
    ///
    /// Returns both the store and the `TempDir` so the caller keeps
    /// ownership of the directory (preventing it from being removed).
    fn create_test_store() -> (PreferenceStore, tempfile::TempDir) {
        let dir = tempdir().expect("failed to create tempdir");
        let store = PreferenceStore::new_with_path(dir.path().join("preferences.db"))
            .expect("failed to create store");
        (store, dir)
    }

    #[test]
    fn test_load_returns_empty_record_for_new_store() {
        let (store, _dir) = create_test_store();
        let record = store.load().expect("load failed");
        assert!(record.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (store, _dir) = create_test_store();
        let record = PreferenceRecord {
            last_search: Some("5 days in Kyoto".to_string()),
            timestamp: Some(1_722_000_000_000),
        };

        store.save(&record).expect("save failed");
        let loaded = store.load().expect("load failed");
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_save_is_idempotent() {
        let (store, _dir) = create_test_store();
        let record = PreferenceRecord {
            last_search: Some("weekend in Oslo".to_string()),
            timestamp: Some(1_000),
        };

        store.save(&record).expect("first save failed");
        let after_once = store.load().expect("load failed");

        store.save(&record).expect("second save failed");
        let after_twice = store.load().expect("load failed");

        assert_eq!(after_once, after_twice);
    }

    #[test]
    fn test_partial_save_merges_over_stored_fields() {
        let (store, _dir) = create_test_store();
        store
            .save(&PreferenceRecord {
                last_search: Some("first search".to_string()),
                timestamp: Some(1_000),
            })
            .expect("save failed");

        // Update only the timestamp; lastSearch must survive.
        store
            .save(&PreferenceRecord {
                last_search: None,
                timestamp: Some(2_000),
            })
            .expect("merge save failed");

        let loaded = store.load().expect("load failed");
        assert_eq!(loaded.last_search.as_deref(), Some("first search"));
        assert_eq!(loaded.timestamp, Some(2_000));
    }

    #[test]
    fn test_save_overwrites_previous_values() {
        let (store, _dir) = create_test_store();
        store
            .save(&PreferenceRecord::for_search("old"))
            .expect("save failed");
        store
            .save(&PreferenceRecord::for_search("new"))
            .expect("save failed");

        let loaded = store.load().expect("load failed");
        assert_eq!(loaded.last_search.as_deref(), Some("new"));
    }

    #[test]
    fn test_corrupt_stored_value_loads_as_empty() {
        let (store, _dir) = create_test_store();

        let conn = Connection::open(&store.db_path).expect("open connection");
        conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)",
            params![PREFERENCES_KEY, "{not valid json"],
        )
        .expect("insert corrupt value");

        let record = store.load().expect("load failed");
        assert!(record.is_empty());
    }

    #[test]
    fn test_corrupt_stored_value_is_replaced_on_save() {
        let (store, _dir) = create_test_store();

        let conn = Connection::open(&store.db_path).expect("open connection");
        conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)",
            params![PREFERENCES_KEY, "\"just a string\""],
        )
        .expect("insert corrupt value");

        store
            .save(&PreferenceRecord::for_search("recovered"))
            .expect("save failed");
        let loaded = store.load().expect("load failed");
        assert_eq!(loaded.last_search.as_deref(), Some("recovered"));
    }

    #[test]
    fn test_unknown_stored_fields_survive_a_merge() {
        let (store, _dir) = create_test_store();

        let conn = Connection::open(&store.db_path).expect("open connection");
        conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)",
            params![PREFERENCES_KEY, r#"{"theme": "dark"}"#],
        )
        .expect("insert seeded value");

        store
            .save(&PreferenceRecord::for_search("kept"))
            .expect("save failed");

        let raw: String = conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![PREFERENCES_KEY],
                |row| row.get(0),
            )
            .expect("query failed");
        let value: Value = serde_json::from_str(&raw).expect("stored value is JSON");
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["lastSearch"], "kept");
    }

    #[test]
    fn test_for_search_sets_both_fields() {
        let before = chrono::Utc::now().timestamp_millis();
        let record = PreferenceRecord::for_search("somewhere warm");
        assert_eq!(record.last_search.as_deref(), Some("somewhere warm"));
        assert!(record.timestamp.unwrap() >= before);
    }

    #[test]
    #[serial]
    fn test_new_respects_env_override() {
        // Use nested path to ensure parent directory creation is exercised.
        let dir = tempdir().expect("failed to create tempdir");
        let db_path = dir.path().join("nested").join("preferences.db");
        std::env::set_var("WAYFARER_PREFS_DB", db_path.to_string_lossy().to_string());

        let store = PreferenceStore::new().expect("new failed with env override");
        assert_eq!(store.db_path, db_path);
        assert!(db_path.parent().unwrap().exists());

        std::env::remove_var("WAYFARER_PREFS_DB");
    }
}
