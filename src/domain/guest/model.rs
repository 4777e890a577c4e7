//! Guest domain entity

use chrono::{DateTime, Utc};

/// A club guest who can hold reservations.
#[derive(Debug, Clone)]
pub struct Guest {
    /// Unique guest ID, assigned by the store on insert (0 = unsaved)
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Guest {
    pub fn new(name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            created_at,
        }
    }
}
