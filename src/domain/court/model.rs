//! Tennis court domain entity

use chrono::{DateTime, Utc};

/// A bookable court.
#[derive(Debug, Clone)]
pub struct TennisCourt {
    /// Unique court ID, assigned by the store on insert (0 = unsaved)
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl TennisCourt {
    pub fn new(name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            created_at,
        }
    }
}
