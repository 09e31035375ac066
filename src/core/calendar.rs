//! Calendar-aware differences between two wall-clock date-times.
//!
//! Units are peeled off coarsest first: whole months (honouring month
//! lengths, clamped to the end of shorter months), then fixed-size weeks,
//! days, hours, minutes and seconds from what is left. Both entry points
//! are total and order-independent: they always measure from the earlier
//! to the later instant, so no component is ever negative.

use crate::models::locale::TimeUnit;
use chrono::{Datelike, Months, NaiveDateTime};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Full breakdown used by the relative phrase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarDelta {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Day/hour/minute/second breakdown shown by the counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeComponents {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CalendarDelta {
    pub fn between(a: NaiveDateTime, b: NaiveDateTime) -> Self {
        let (earlier, later) = ordered(a, b);

        let months = whole_months_between(earlier, later);
        // whole_months_between only returns counts whose anchor is representable
        let anchor = earlier
            .checked_add_months(Months::new(months))
            .unwrap_or(earlier);

        let mut rest = (later - anchor).num_seconds();
        let days = rest / SECS_PER_DAY;
        rest %= SECS_PER_DAY;
        let hours = rest / SECS_PER_HOUR;
        rest %= SECS_PER_HOUR;

        Self {
            years: i64::from(months / 12),
            months: i64::from(months % 12),
            weeks: days / 7,
            days: days % 7,
            hours,
            minutes: rest / SECS_PER_MINUTE,
            seconds: rest % SECS_PER_MINUTE,
        }
    }

    /// Coarsest unit with a non-zero count, or `None` when both instants
    /// fall within the same second.
    pub fn coarsest(&self) -> Option<(TimeUnit, i64)> {
        [
            (TimeUnit::Year, self.years),
            (TimeUnit::Month, self.months),
            (TimeUnit::Week, self.weeks),
            (TimeUnit::Day, self.days),
            (TimeUnit::Hour, self.hours),
            (TimeUnit::Minute, self.minutes),
            (TimeUnit::Second, self.seconds),
        ]
        .into_iter()
        .find(|(_, count)| *count > 0)
    }

    pub fn is_zero(&self) -> bool {
        self.coarsest().is_none()
    }
}

impl TimeComponents {
    pub fn between(a: NaiveDateTime, b: NaiveDateTime) -> Self {
        let (earlier, later) = ordered(a, b);
        let mut rest = (later - earlier).num_seconds();

        let days = rest / SECS_PER_DAY;
        rest %= SECS_PER_DAY;
        let hours = rest / SECS_PER_HOUR;
        rest %= SECS_PER_HOUR;

        Self {
            days,
            hours,
            minutes: rest / SECS_PER_MINUTE,
            seconds: rest % SECS_PER_MINUTE,
        }
    }

    /// Total length in seconds; the inverse of `between`.
    pub fn total_seconds(&self) -> i64 {
        self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds
    }
}

fn ordered(a: NaiveDateTime, b: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Largest `m` such that `earlier + m months <= later`.
fn whole_months_between(earlier: NaiveDateTime, later: NaiveDateTime) -> u32 {
    let span = (later.year() - earlier.year()) * 12 + later.month() as i32
        - earlier.month() as i32;
    let mut months = span.max(0) as u32;

    while months > 0 {
        match earlier.checked_add_months(Months::new(months)) {
            Some(anchor) if anchor <= later => break,
            _ => months -= 1,
        }
    }
    months
}
