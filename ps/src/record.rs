//! The stored preference record

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// One visitor's most recent travel preferences.
///
/// Every field except `user_id` is free-form text and is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    /// Unique key chosen by the caller
    pub user_id: String,

    /// City being visited
    pub city: String,

    /// Raw time-range expression, e.g. `10am - 4pm`
    pub available_time: String,

    /// Budget for the day, never parsed
    pub budget: String,

    /// Topics the visitor cares about
    pub interests: String,

    /// Hotel or first attraction
    pub starting_point: String,
}

impl PreferenceRecord {
    /// Create a new record
    pub fn new(
        user_id: impl Into<String>,
        city: impl Into<String>,
        available_time: impl Into<String>,
        budget: impl Into<String>,
        interests: impl Into<String>,
        starting_point: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            city: city.into(),
            available_time: available_time.into(),
            budget: budget.into(),
            interests: interests.into(),
            starting_point: starting_point.into(),
        }
    }
}

/// Reject keys that cannot identify a visitor
pub fn validate_key(user_id: &str) -> Result<()> {
    if user_id.trim().is_empty() {
        return Err(StoreError::InvalidKey(user_id.to_string()));
    }
    Ok(())
}
