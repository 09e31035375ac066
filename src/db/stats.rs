use crate::db::migrate::{current_version, latest_version};
use crate::db::pool::DbPool;
use crate::db::queries::{count_events, timestamp_from_db};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::Local;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Schema:{} v{} (latest v{})",
        CYAN,
        RESET,
        current_version(&pool.conn)?,
        latest_version()
    );

    //
    // 2) TOTAL EVENTS
    //
    let count = count_events(&pool.conn)?;
    println!(
        "{}• Total events:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) TIMESTAMP RANGE
    //
    let first: Option<(i64, u32)> = pool
        .conn
        .query_row(
            "SELECT timestamp, timestamp_nanos FROM events
             ORDER BY timestamp ASC, timestamp_nanos ASC LIMIT 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let last: Option<(i64, u32)> = pool
        .conn
        .query_row(
            "SELECT timestamp, timestamp_nanos FROM events
             ORDER BY timestamp DESC, timestamp_nanos DESC LIMIT 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    println!("{}• Timestamp range:{}", CYAN, RESET);
    println!("    from: {}", fmt_bound(first)?);
    println!("    to:   {}", fmt_bound(last)?);

    println!();
    Ok(())
}

fn fmt_bound(raw: Option<(i64, u32)>) -> AppResult<String> {
    match raw {
        Some((secs, nanos)) => Ok(timestamp_from_db(secs, nanos)?
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()),
        None => Ok(format!("{GREY}--{RESET}")),
    }
}
