use crate::errors::{AppError, AppResult};
use crate::models::event_item::EventItem;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Storage form of a timestamp: Unix seconds plus the sub-second nanos.
/// Integer columns order chronologically for every representable year.
pub fn timestamp_to_db(ts: &DateTime<Utc>) -> (i64, u32) {
    (ts.timestamp(), ts.timestamp_subsec_nanos())
}

pub fn timestamp_from_db(secs: i64, nanos: u32) -> AppResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, nanos)
        .ok_or_else(|| AppError::InvalidTimestamp(format!("{}.{:09}", secs, nanos)))
}

pub fn map_row(row: &Row) -> Result<EventItem> {
    let secs: i64 = row.get("timestamp")?;
    let nanos: u32 = row.get("timestamp_nanos")?;
    let timestamp = timestamp_from_db(secs, nanos).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Integer, Box::new(e))
    })?;

    Ok(EventItem::new(
        row.get("id")?,
        row.get::<_, String>("name")?,
        timestamp,
    ))
}

/// All events, most recent timestamp first. Ties fall back to the newest id.
pub fn load_events(conn: &Connection) -> AppResult<Vec<EventItem>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, timestamp, timestamp_nanos FROM events
         ORDER BY timestamp DESC, timestamp_nanos DESC, id DESC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_event(conn: &Connection, id: i64) -> AppResult<Option<EventItem>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, timestamp, timestamp_nanos FROM events WHERE id = ?1",
    )?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// Insert and return the generated id.
pub fn insert_event(conn: &Connection, name: &str, timestamp: &DateTime<Utc>) -> AppResult<i64> {
    let (secs, nanos) = timestamp_to_db(timestamp);
    conn.execute(
        "INSERT INTO events (name, timestamp, timestamp_nanos) VALUES (?1, ?2, ?3)",
        params![name, secs, nanos],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite name and timestamp. Returns false when the id does not exist.
pub fn update_event(conn: &Connection, ev: &EventItem) -> AppResult<bool> {
    let (secs, nanos) = timestamp_to_db(&ev.timestamp);
    let changed = conn.execute(
        "UPDATE events SET name = ?1, timestamp = ?2, timestamp_nanos = ?3 WHERE id = ?4",
        params![ev.name, secs, nanos, ev.id],
    )?;
    Ok(changed > 0)
}

pub fn delete_event(conn: &Connection, id: i64) -> AppResult<bool> {
    let changed = conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
    Ok(changed > 0)
}

pub fn count_events(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?)
}
