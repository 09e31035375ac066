//! Human-readable renderings of the time between an event and "now".

use crate::core::calendar::{CalendarDelta, TimeComponents};
use crate::models::locale::Locale;
use chrono::{DateTime, TimeZone};

/// Single coarsest unit of difference, always phrased in the past tense
/// ("il y a 2 heures"), whichever side of `now` the reference lies on.
/// Calendar units are evaluated in the wall-clock time of `Tz`.
pub fn relative_time<Tz: TimeZone>(
    reference: &DateTime<Tz>,
    now: &DateTime<Tz>,
    locale: Locale,
) -> String {
    let delta = CalendarDelta::between(reference.naive_local(), now.naive_local());

    match delta.coarsest() {
        Some((unit, count)) => locale.ago(unit, count),
        None => locale.just_now().to_string(),
    }
}

/// Days, hours, minutes and seconds between `start` and `end`, each as a
/// non-negative remainder after the coarser units are removed.
pub fn time_components<Tz: TimeZone>(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
) -> TimeComponents {
    TimeComponents::between(start.naive_local(), end.naive_local())
}
