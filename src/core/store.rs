use crate::db::log::ttlog_soft;
use crate::db::queries::{delete_event, insert_event, load_event, load_events, update_event};
use crate::errors::{AppError, AppResult};
use crate::models::event_item::{EventItem, EventPatch};
use crate::models::locale::Locale;
use chrono::{DateTime, Utc};
use rusqlite::Connection;

/// CRUD facade over the `events` table.
///
/// Every successful mutation leaves one line in the internal `log` table.
/// Operations addressing an id that does not exist are no-ops and report it
/// through their return value (`None` / `false`), never as an error.
pub struct EventStore<'a> {
    conn: &'a Connection,
    locale: Locale,
}

impl<'a> EventStore<'a> {
    pub fn new(conn: &'a Connection, locale: Locale) -> Self {
        Self { conn, locale }
    }

    /// Insert a new event. A blank name is replaced by the locale placeholder.
    pub fn create(&self, name: &str, timestamp: DateTime<Utc>) -> AppResult<EventItem> {
        let name = match name.trim() {
            "" => self.locale.placeholder_name(),
            trimmed => trimmed,
        };

        // Insert and read-back succeed or fail together.
        let tx = self.conn.unchecked_transaction()?;
        let id = insert_event(&tx, name, &timestamp)?;
        let stored = load_event(&tx, id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)?;
        tx.commit()?;

        ttlog_soft(
            self.conn,
            "add",
            &format!("#{}", id),
            &format!("Created '{}' at {}", stored.name, stored.timestamp.to_rfc3339()),
        );
        Ok(stored)
    }

    /// Every event, most recent timestamp first.
    pub fn list(&self) -> AppResult<Vec<EventItem>> {
        load_events(self.conn)
    }

    pub fn get(&self, id: i64) -> AppResult<Option<EventItem>> {
        load_event(self.conn, id)
    }

    /// Apply the fields present in `patch`. A missing id is a no-op; an
    /// explicitly blank name on an existing event is rejected untouched.
    pub fn update(&self, id: i64, patch: EventPatch) -> AppResult<Option<EventItem>> {
        let tx = self.conn.unchecked_transaction()?;
        let Some(mut ev) = load_event(&tx, id)? else {
            return Ok(None);
        };

        match patch.name {
            Some(n) if n.trim().is_empty() => return Err(AppError::EmptyName),
            Some(n) => ev.name = n.trim().to_string(),
            None => {}
        }
        if let Some(ts) = patch.timestamp {
            ev.timestamp = ts;
        }

        if !update_event(&tx, &ev)? {
            return Ok(None);
        }
        let stored = load_event(&tx, id)?;
        tx.commit()?;
        if let Some(s) = &stored {
            ttlog_soft(
                self.conn,
                "edit",
                &format!("#{}", id),
                &format!("Now '{}' at {}", s.name, s.timestamp.to_rfc3339()),
            );
        }
        Ok(stored)
    }

    /// Remove an event. Returns whether something was deleted.
    pub fn delete(&self, id: i64) -> AppResult<bool> {
        let existing = load_event(self.conn, id)?;
        let deleted = delete_event(self.conn, id)?;

        if deleted {
            let name = existing.map(|e| e.name).unwrap_or_default();
            ttlog_soft(
                self.conn,
                "del",
                &format!("#{}", id),
                &format!("Deleted '{}'", name),
            );
        }
        Ok(deleted)
    }

    /// Restart the counter: only the timestamp changes.
    pub fn reset(&self, id: i64, now: DateTime<Utc>) -> AppResult<Option<EventItem>> {
        let tx = self.conn.unchecked_transaction()?;
        let Some(mut ev) = load_event(&tx, id)? else {
            return Ok(None);
        };

        ev.timestamp = now;
        if !update_event(&tx, &ev)? {
            return Ok(None);
        }
        let stored = load_event(&tx, id)?;
        tx.commit()?;
        if let Some(s) = &stored {
            ttlog_soft(
                self.conn,
                "reset",
                &format!("#{}", id),
                &format!("Counter of '{}' reset to {}", s.name, s.timestamp.to_rfc3339()),
            );
        }
        Ok(stored)
    }
}
