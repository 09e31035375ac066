use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::archive::zip_file;
use chrono::Local;
use rusqlite::Connection;
use std::path::Path;

/// A schema step, applied once and tracked through `PRAGMA user_version`.
struct Migration {
    version: i32,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_log_table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: 2,
        name: "create_events_table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS events (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            timestamp  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: 3,
        name: "index_events_timestamp",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_events_timestamp ON events(timestamp);
        "#,
    },
    Migration {
        version: 4,
        name: "events_integer_timestamps",
        sql: r#"
        CREATE TABLE events_new (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            name            TEXT NOT NULL,
            timestamp       INTEGER NOT NULL,
            timestamp_nanos INTEGER NOT NULL DEFAULT 0
        );
        INSERT INTO events_new (id, name, timestamp, timestamp_nanos)
            SELECT id, name, CAST(strftime('%s', timestamp) AS INTEGER), 0 FROM events;
        DELETE FROM sqlite_sequence WHERE name = 'events_new';
        INSERT INTO sqlite_sequence (name, seq)
            SELECT 'events_new', seq FROM sqlite_sequence WHERE name = 'events';
        DROP TABLE events;
        ALTER TABLE events_new RENAME TO events;
        CREATE INDEX IF NOT EXISTS idx_events_timestamp
            ON events(timestamp, timestamp_nanos);
        "#,
    },
];

/// Highest schema version this build knows about.
pub fn latest_version() -> i32 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

pub fn current_version(conn: &Connection) -> AppResult<i32> {
    Ok(conn.query_row("PRAGMA user_version", [], |row| row.get(0))?)
}

/// Apply every migration newer than the database's schema version.
/// Returns how many were applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    let current = current_version(conn)?;
    let latest = latest_version();

    if current > latest {
        return Err(AppError::Migration(format!(
            "database schema v{} is newer than this build supports (v{})",
            current, latest
        )));
    }

    let pending: Vec<&Migration> = MIGRATIONS.iter().filter(|m| m.version > current).collect();
    if pending.is_empty() {
        return Ok(0);
    }

    // Only an existing schema is worth saving before an upgrade.
    if current > 0 {
        backup_before_migration(conn, latest);
    }

    for m in &pending {
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(m.sql)
            .map_err(|e| AppError::Migration(format!("{} failed: {}", m.name, e)))?;
        tx.pragma_update(None, "user_version", m.version)?;
        tx.commit()?;

        ttlog(
            conn,
            "migration_applied",
            m.name,
            &format!("Schema upgraded to v{}", m.version),
        )?;
    }

    success(format!(
        "Database schema upgraded from v{} to v{}.",
        current, latest
    ));
    Ok(pending.len())
}

/// Zip the database file next to itself. Failures only warn.
fn backup_before_migration(conn: &Connection, target: i32) {
    let db_path: String = conn
        .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
        .unwrap_or_default();

    if db_path.is_empty() {
        warning("Could not determine DB path, backup skipped.");
        return;
    }

    let src = Path::new(&db_path);
    let backup_name = format!(
        "{}-backup_db_pre_v{}.zip",
        Local::now().format("%Y%m%d_%H%M%S"),
        target
    );
    let dest = src.with_file_name(backup_name);

    match zip_file(src, &dest) {
        Ok(()) => success(format!("Pre-migration backup: {}", dest.display())),
        Err(e) => warning(format!("Pre-migration backup failed: {}", e)),
    }
}
