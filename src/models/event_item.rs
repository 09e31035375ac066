use chrono::{DateTime, Utc};
use serde::Serialize;

/// A tracked event: a label plus the instant its counter refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventItem {
    pub id: i64,                  // ⇔ events.id (INTEGER PK AUTOINCREMENT)
    pub name: String,             // ⇔ events.name
    pub timestamp: DateTime<Utc>, // ⇔ events.timestamp (TEXT, RFC 3339 UTC)
}

impl EventItem {
    pub fn new(id: i64, name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            timestamp,
        }
    }

    /// True when the event lies after `now`, i.e. the counter counts down.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.timestamp > now
    }
}

/// Partial update applied by `edit`. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub name: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.timestamp.is_none()
    }
}
