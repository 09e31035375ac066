use chrono::{DateTime, Duration, TimeZone, Utc};
use mytime::core::calendar::{CalendarDelta, TimeComponents};
use mytime::core::formatter::{relative_time, time_components};
use mytime::models::locale::{Locale, TimeUnit};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

fn fr(reference: DateTime<Utc>, now: DateTime<Utc>) -> String {
    relative_time(&reference, &now, Locale::Fr)
}

#[test]
fn test_relative_time_same_instant_is_just_now() {
    let t = at(2025, 3, 10, 12, 0, 0);
    assert_eq!(fr(t, t), "À l'instant");
    assert_eq!(relative_time(&t, &t, Locale::En), "just now");
}

#[test]
fn test_relative_time_ignores_subsecond_difference() {
    let t = at(2025, 3, 10, 12, 0, 0);
    assert_eq!(fr(t, t + Duration::milliseconds(500)), "À l'instant");
}

#[test]
fn test_relative_time_small_units_singular_and_plural() {
    let t = at(2025, 3, 10, 12, 0, 0);
    assert_eq!(fr(t, t + Duration::seconds(1)), "il y a 1 seconde");
    assert_eq!(fr(t, t + Duration::seconds(59)), "il y a 59 secondes");
    assert_eq!(fr(t, t + Duration::seconds(60)), "il y a 1 minute");
    assert_eq!(fr(t, t + Duration::minutes(2) + Duration::seconds(30)), "il y a 2 minutes");
    assert_eq!(fr(t, t + Duration::hours(1)), "il y a 1 heure");
    assert_eq!(fr(t, t + Duration::hours(3)), "il y a 3 heures");
}

#[test]
fn test_relative_time_25_hours_is_one_day() {
    let t = at(2025, 3, 10, 12, 0, 0);
    assert_eq!(fr(t, t + Duration::hours(25)), "il y a 1 jour");
    assert_eq!(fr(t, t + Duration::days(6)), "il y a 6 jours");
}

#[test]
fn test_relative_time_weeks() {
    let t = at(2025, 3, 1, 0, 0, 0);
    assert_eq!(fr(t, t + Duration::days(7)), "il y a 1 semaine");
    assert_eq!(fr(t, t + Duration::days(13)), "il y a 1 semaine");
    assert_eq!(fr(t, t + Duration::days(14)), "il y a 2 semaines");
}

#[test]
fn test_relative_time_months_follow_calendar_lengths() {
    // 28 days, but a whole calendar month
    assert_eq!(fr(at(2025, 2, 1, 0, 0, 0), at(2025, 3, 1, 0, 0, 0)), "il y a 1 mois");
    // 29 days in a leap year, still one month
    assert_eq!(fr(at(2024, 2, 1, 0, 0, 0), at(2024, 3, 1, 0, 0, 0)), "il y a 1 mois");
    // 30 days that do not complete a month
    assert_eq!(fr(at(2025, 1, 15, 0, 0, 0), at(2025, 2, 14, 0, 0, 0)), "il y a 4 semaines");
    // Jan 31 + 1 month clamps to Feb 28
    assert_eq!(fr(at(2025, 1, 31, 0, 0, 0), at(2025, 3, 1, 0, 0, 0)), "il y a 1 mois");
    assert_eq!(fr(at(2025, 1, 15, 0, 0, 0), at(2025, 12, 14, 0, 0, 0)), "il y a 10 mois");
}

#[test]
fn test_relative_time_years() {
    assert_eq!(fr(at(2024, 6, 1, 0, 0, 0), at(2025, 6, 1, 0, 0, 0)), "il y a 1 an");
    assert_eq!(fr(at(2023, 6, 1, 0, 0, 0), at(2025, 7, 20, 0, 0, 0)), "il y a 2 ans");
    assert_eq!(fr(at(2020, 2, 29, 8, 0, 0), at(2021, 2, 28, 8, 0, 0)), "il y a 1 an");
    assert_eq!(fr(at(2024, 6, 2, 0, 0, 0), at(2025, 6, 1, 0, 0, 0)), "il y a 11 mois");
}

#[test]
fn test_relative_time_future_reference_still_reads_as_ago() {
    let now = at(2025, 3, 10, 12, 0, 0);
    assert_eq!(fr(now + Duration::days(3), now), "il y a 3 jours");
    assert_eq!(
        relative_time(&(now + Duration::hours(2)), &now, Locale::En),
        "2 hours ago"
    );
}

#[test]
fn test_relative_time_english_phrases() {
    let t = at(2025, 3, 1, 0, 0, 0);
    let en = |now: DateTime<Utc>| relative_time(&t, &now, Locale::En);
    assert_eq!(en(t + Duration::days(1)), "1 day ago");
    assert_eq!(en(t + Duration::days(21)), "3 weeks ago");
    assert_eq!(en(at(2026, 3, 1, 0, 0, 0)), "1 year ago");
}

#[test]
fn test_time_components_example() {
    let c = time_components(&at(2025, 1, 1, 0, 0, 0), &at(2025, 1, 2, 1, 2, 3));
    assert_eq!(
        c,
        TimeComponents {
            days: 1,
            hours: 1,
            minutes: 2,
            seconds: 3
        }
    );
}

#[test]
fn test_time_components_inverted_order_is_non_negative() {
    let c = time_components(&at(2025, 1, 2, 1, 2, 3), &at(2025, 1, 1, 0, 0, 0));
    assert_eq!((c.days, c.hours, c.minutes, c.seconds), (1, 1, 2, 3));
}

#[test]
fn test_time_components_hours_are_remainder_not_total() {
    let start = at(2025, 1, 31, 23, 0, 0);
    let c = time_components(&start, &at(2025, 2, 1, 1, 30, 0));
    assert_eq!((c.days, c.hours, c.minutes, c.seconds), (0, 2, 30, 0));

    let c = time_components(&start, &(start + Duration::days(40) + Duration::seconds(59)));
    assert_eq!((c.days, c.hours, c.minutes, c.seconds), (40, 0, 0, 59));
}

#[test]
fn test_time_components_reconstruct_total() {
    let start = at(2025, 5, 5, 5, 5, 5);
    let end = start + Duration::seconds(987_654);
    let c = time_components(&start, &end);
    assert_eq!(c.total_seconds(), 987_654);
    assert!(c.hours < 24 && c.minutes < 60 && c.seconds < 60);
}

#[test]
fn test_calendar_delta_coarsest() {
    let a = at(2025, 1, 1, 0, 0, 0).naive_utc();
    let b = at(2025, 1, 1, 0, 0, 42).naive_utc();
    assert_eq!(CalendarDelta::between(a, b).coarsest(), Some((TimeUnit::Second, 42)));
    assert!(CalendarDelta::between(a, a).is_zero());
}

#[test]
fn test_locale_labels() {
    assert_eq!(Locale::Fr.counter_label(TimeUnit::Day, 1), "Jour");
    assert_eq!(Locale::Fr.counter_label(TimeUnit::Day, 0), "Jours");
    assert_eq!(Locale::Fr.counter_label(TimeUnit::Second, 2), "Secondes");
    assert_eq!(Locale::En.counter_label(TimeUnit::Hour, 1), "Hour");
    assert_eq!(Locale::from_code("EN"), Some(Locale::En));
    assert_eq!(Locale::from_code("de"), None);
}
