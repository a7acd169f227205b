//! SQLite-backed preference store

use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::record::{PreferenceRecord, validate_key};
use crate::store::PreferenceStore;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS preferences (
    user_id TEXT PRIMARY KEY,
    city TEXT,
    available_time TEXT,
    budget TEXT,
    interests TEXT,
    starting_point TEXT
)";

const UPSERT: &str = "
INSERT INTO preferences (user_id, city, available_time, budget, interests, starting_point)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
ON CONFLICT(user_id) DO UPDATE SET
    city = excluded.city,
    available_time = excluded.available_time,
    budget = excluded.budget,
    interests = excluded.interests,
    starting_point = excluded.starting_point";

const SELECT_ONE: &str = "
SELECT user_id, city, available_time, budget, interests, starting_point
FROM preferences
WHERE user_id = ?1";

/// Preference store living in a single SQLite file
pub struct SqlitePreferenceStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqlitePreferenceStore {
    /// Open or create a store at the given database file, using the default busy timeout
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_timeout(path, Duration::from_millis(crate::DEFAULT_BUSY_TIMEOUT_MS))
    }

    /// Open or create a store, waiting up to `busy_timeout` for other writers
    pub fn open_with_timeout(path: impl AsRef<Path>, busy_timeout: Duration) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::unavailable(format!("create directory {}", parent.display()), e))?;
        }

        let conn = Connection::open(&path)
            .map_err(|e| StoreError::unavailable(format!("open {}", path.display()), e))?;
        conn.busy_timeout(busy_timeout)
            .map_err(|e| StoreError::unavailable("configure busy timeout", e))?;

        let store = Self { conn, path: Some(path) };
        store.ensure_schema()?;
        debug!(path = ?store.path, "Opened preference store");
        Ok(store)
    }

    /// Open a private, non-durable store for tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::unavailable("open in-memory database", e))?;
        let store = Self { conn, path: None };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Database file backing this store, `None` when in memory
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn ensure_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(SCHEMA)
            .map_err(|e| StoreError::unavailable("create preferences table", e))?;
        debug!("Preferences schema ensured");
        Ok(())
    }

    fn load(&self, user_id: &str) -> Result<Option<PreferenceRecord>> {
        validate_key(user_id)?;

        let record = self
            .conn
            .query_row(SELECT_ONE, [user_id], |row| {
                Ok(PreferenceRecord {
                    user_id: row.get(0)?,
                    city: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    available_time: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    budget: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                    interests: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                    starting_point: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
                })
            })
            .optional()
            .map_err(|e| StoreError::unavailable(format!("load preferences for {user_id}"), e))?;

        debug!(user_id, found = record.is_some(), "Loaded preferences");
        Ok(record)
    }

    fn save(&self, record: &PreferenceRecord) -> Result<()> {
        validate_key(&record.user_id)?;

        self.conn
            .execute(
                UPSERT,
                params![
                    record.user_id,
                    record.city,
                    record.available_time,
                    record.budget,
                    record.interests,
                    record.starting_point,
                ],
            )
            .map_err(|e| StoreError::unavailable(format!("save preferences for {}", record.user_id), e))?;

        info!(user_id = %record.user_id, "Saved preferences");
        Ok(())
    }
}
