//! Preference store error types

use thiserror::Error;

/// Errors returned by a [`PreferenceStore`](crate::PreferenceStore)
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium could not be opened, read or written
    #[error("Storage unavailable: {context}")]
    StorageUnavailable {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The user id is empty or blank
    #[error("Invalid user id: {0:?}")]
    InvalidKey(String),
}

impl StoreError {
    /// Wrap a backend error with a short description of what was being attempted
    pub fn unavailable(context: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        StoreError::StorageUnavailable {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// Check if the medium itself failed
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, StoreError::StorageUnavailable { .. })
    }

    /// Check if the caller supplied a bad key
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, StoreError::InvalidKey(_))
    }
}

/// Result alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
