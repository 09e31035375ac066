use crate::models::event_item::EventItem;
use chrono::SecondsFormat;
use serde::Serialize;

/// Flat export row. The timestamp is RFC 3339 in UTC.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventExport {
    pub id: i64,
    pub name: String,
    pub timestamp: String,
}

impl From<&EventItem> for EventExport {
    fn from(ev: &EventItem) -> Self {
        Self {
            id: ev.id,
            name: ev.name.clone(),
            timestamp: ev.timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}
