use chrono::{DateTime, Duration, TimeZone, Utc};
use mytime::core::counter::CounterLogic;
use mytime::core::store::EventStore;
use mytime::db::pool::{DbPool, open_ready};
use mytime::models::locale::Locale;
use mytime::utils::time::Clock;
use std::env;
use std::fs;
use std::thread;
use std::time::Instant;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

/// Value row of the counter grid, without colour codes.
fn grid(days: i64, hours: i64, minutes: i64, seconds: i64) -> String {
    [days, hours, minutes, seconds]
        .iter()
        .map(|v| format!("{:^10}|", v.to_string()))
        .collect()
}

#[test]
fn test_render_shows_component_values() {
    let pool = open_ready(":memory:").expect("in-memory db");
    let store = EventStore::new(&pool.conn, Locale::Fr);
    let ev = store.create("Vacances", at(2025, 1, 10, 0, 0, 0)).unwrap();

    let out = CounterLogic::render(&ev, at(2025, 1, 11, 1, 2, 3), Locale::Fr, "%d/%m/%Y");
    assert!(out.contains(&grid(1, 1, 2, 3)), "{out}");
    assert!(out.contains("Jour") && out.contains("Heure"));
    assert!(out.contains("il y a 1 jour"));
}

#[test]
fn test_render_advances_with_now() {
    let pool = open_ready(":memory:").expect("in-memory db");
    let store = EventStore::new(&pool.conn, Locale::En);
    let ev = store.create("Run", at(2025, 1, 10, 0, 0, 0)).unwrap();
    let now = at(2025, 1, 10, 0, 0, 59);

    let first = CounterLogic::render(&ev, now, Locale::En, "%d/%m/%Y");
    let second = CounterLogic::render(&ev, now + Duration::seconds(1), Locale::En, "%d/%m/%Y");

    assert!(first.contains(&grid(0, 0, 0, 59)));
    assert!(second.contains(&grid(0, 0, 1, 0)));
    assert!(second.contains("1 minute ago"));
}

#[test]
fn test_watch_ends_when_event_is_deleted_elsewhere() {
    let mut path = env::temp_dir();
    path.push("counter_watch_delete_mytime.sqlite");
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();

    let pool = open_ready(&db_path).expect("open db");
    let store = EventStore::new(&pool.conn, Locale::Fr);
    let ev = store.create("Éphémère", at(2025, 1, 1, 0, 0, 0)).unwrap();

    let other_path = db_path.clone();
    let deleter = thread::spawn(move || {
        thread::sleep(std::time::Duration::from_millis(1500));
        let other = DbPool::new(&other_path).expect("second connection");
        EventStore::new(&other.conn, Locale::Fr)
            .delete(ev.id)
            .expect("delete from second connection")
    });

    let started = Instant::now();
    CounterLogic::watch(&store, ev.id, &Clock::system(), Some(30), Locale::Fr, "%d/%m/%Y")
        .expect("watch returns cleanly");

    assert!(deleter.join().unwrap());
    assert!(started.elapsed().as_secs() < 10, "loop must stop once the event is gone");
    assert!(store.get(ev.id).unwrap().is_none());

    drop(pool);
    fs::remove_file(&db_path).ok();
}
