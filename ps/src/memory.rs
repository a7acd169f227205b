//! In-process preference store

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::record::{PreferenceRecord, validate_key};
use crate::store::PreferenceStore;

/// Non-durable store keeping records in a map. Useful as a test double and
/// for sessions that should not touch the disk.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    records: Mutex<HashMap<String, PreferenceRecord>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, PreferenceRecord>>> {
        self.records
            .lock()
            .map_err(|e| StoreError::unavailable("lock in-memory records", PoisonedLock(e.to_string())))
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    fn load(&self, user_id: &str) -> Result<Option<PreferenceRecord>> {
        validate_key(user_id)?;
        let record = self.lock()?.get(user_id).cloned();
        debug!(user_id, found = record.is_some(), "Loaded preferences from memory");
        Ok(record)
    }

    fn save(&self, record: &PreferenceRecord) -> Result<()> {
        validate_key(&record.user_id)?;
        self.lock()?.insert(record.user_id.clone(), record.clone());
        debug!(user_id = %record.user_id, "Saved preferences to memory");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct PoisonedLock(String);
