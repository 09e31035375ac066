//! Time utilities: parsing user date-times, local formatting and the clock.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::time::Instant;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a user supplied date-time, reading naive values in the local zone.
pub fn parse_datetime(s: &str) -> AppResult<DateTime<Utc>> {
    parse_datetime_in(s, &Local)
}

/// Accepts RFC 3339, `YYYY-MM-DD[ T]HH:MM[:SS]` or a bare `YYYY-MM-DD`
/// (midnight). Naive values are interpreted in `tz`.
pub fn parse_datetime_in<Tz: TimeZone>(s: &str, tz: &Tz) -> AppResult<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| AppError::InvalidDateTime(s.to_string()))?;

    // A wall-clock time skipped by a DST jump has no instant.
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidDateTime(s.to_string()))
}

pub fn parse_optional_datetime(input: Option<&String>) -> AppResult<Option<DateTime<Utc>>> {
    input.map(|s| parse_datetime(s)).transpose()
}

pub fn format_local(ts: &DateTime<Utc>, fmt: &str) -> String {
    ts.with_timezone(&Local).format(fmt).to_string()
}

/// Source of "now". When pinned (hidden `--now` flag) it still advances
/// with real elapsed time so the live counter keeps ticking.
#[derive(Debug, Clone)]
pub struct Clock {
    pinned: Option<DateTime<Utc>>,
    started: Instant,
}

impl Clock {
    pub fn system() -> Self {
        Self {
            pinned: None,
            started: Instant::now(),
        }
    }

    pub fn pinned(at: DateTime<Utc>) -> Self {
        Self {
            pinned: Some(at),
            started: Instant::now(),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        match self.pinned {
            Some(at) => {
                let elapsed = chrono::Duration::from_std(self.started.elapsed())
                    .unwrap_or_else(|_| chrono::Duration::zero());
                at + elapsed
            }
            None => Utc::now(),
        }
    }
}
