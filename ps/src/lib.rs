//! PrefStore - durable per-visitor travel preferences
//!
//! Stores one [`PreferenceRecord`] per user id. Saving under an existing id
//! replaces the whole record; loading an unknown id yields `None`.
//!
//! # Backends
//!
//! - [`SqlitePreferenceStore`] - a single `preferences` table in a SQLite file
//! - [`MemoryPreferenceStore`] - a process-local map
//!
//! # Example
//!
//! ```ignore
//! use prefstore::{PreferenceRecord, PreferenceStore, SqlitePreferenceStore};
//!
//! let store = SqlitePreferenceStore::open("preferences.db")?;
//! store.save(&PreferenceRecord::new("u1", "Paris", "10am - 4pm", "$100", "food", "Hotel Lumen"))?;
//! let record = store.load("u1")?;
//! ```

mod error;
mod memory;
mod record;
mod sqlite;
mod store;

pub use error::{Result, StoreError};
pub use memory::MemoryPreferenceStore;
pub use record::{PreferenceRecord, validate_key};
pub use sqlite::SqlitePreferenceStore;
pub use store::PreferenceStore;

/// Default database file name
pub const DEFAULT_DB_FILE: &str = "preferences.db";

/// Default time to wait on a locked database (5s)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
