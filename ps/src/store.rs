//! The storage contract shared by every backend

use crate::error::Result;
use crate::record::PreferenceRecord;

/// Durable mapping from user id to that user's most recent preferences.
///
/// Implementations must make a successful `save` visible to every later
/// `load` for the same key, and must never expose a half-written record.
pub trait PreferenceStore {
    /// Create the backing table or collection if it does not exist yet.
    /// Calling this repeatedly is a no-op.
    fn ensure_schema(&self) -> Result<()>;

    /// Look up the record for `user_id`. Unknown keys yield `Ok(None)`.
    fn load(&self, user_id: &str) -> Result<Option<PreferenceRecord>>;

    /// Insert the record, or fully replace the one stored under the same key.
    fn save(&self, record: &PreferenceRecord) -> Result<()>;
}
