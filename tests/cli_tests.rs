use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, init_db_with_data, mt, setup_test_db, temp_out};

#[test]
fn test_add_and_list_sorted_most_recent_first() {
    let db_path = setup_test_db("cli_list_sorted");
    init_db_with_data(&db_path);

    let out = mt()
        .args(["--db", &db_path, "--lang", "fr", "--now", "2025-07-01 12:00", "list"])
        .output()
        .expect("failed to run list");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let pos_anniv = stdout.find("Anniversaire").expect("Anniversaire listed");
    let pos_vac = stdout.find("Vacances").expect("Vacances listed");
    assert!(pos_anniv < pos_vac, "most recent timestamp must come first");
    assert!(stdout.contains("il y a 2 semaines"));
    assert!(stdout.contains("il y a 6 mois"));
}

#[test]
fn test_list_empty_store() {
    let db_path = setup_test_db("cli_list_empty");
    init_db(&db_path);

    mt().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No events yet"));
}

#[test]
fn test_add_without_name_uses_placeholder() {
    let db_path = setup_test_db("cli_placeholder");
    init_db(&db_path);

    mt().args(["--db", &db_path, "--lang", "fr", "add", "--at", "2025-02-01"])
        .assert()
        .success()
        .stdout(contains("Non renseigné"));

    mt().args(["--db", &db_path, "--lang", "fr", "list"])
        .assert()
        .success()
        .stdout(contains("Non renseigné"));
}

#[test]
fn test_add_future_event_is_listed() {
    let db_path = setup_test_db("cli_future");
    init_db(&db_path);

    mt().args(["--db", &db_path, "add", "Birthday", "--at", "2030-05-17 09:00"])
        .assert()
        .success();

    mt().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Birthday"))
        .stdout(contains("17/05/2030 09:00"));
}

#[test]
fn test_add_rejects_invalid_datetime() {
    let db_path = setup_test_db("cli_bad_date");
    init_db(&db_path);

    mt().args(["--db", &db_path, "add", "Oops", "--at", "next tuesday"])
        .assert()
        .failure()
        .stderr(contains("Invalid date/time"));
}

#[test]
fn test_show_counter_grid() {
    let db_path = setup_test_db("cli_show");
    init_db_with_data(&db_path);

    mt().args([
        "--db",
        &db_path,
        "--lang",
        "fr",
        "--now",
        "2025-01-02 01:02:03",
        "show",
        "1",
    ])
    .assert()
    .success()
    .stdout(contains("Vacances"))
    .stdout(contains("Depuis le"))
    .stdout(contains("Jour").and(contains("Heure")))
    .stdout(contains("Minutes").and(contains("Secondes")))
    .stdout(contains("    1     |    1     |    2     |    3     |"))
    .stdout(contains("il y a 1 jour"));
}

#[test]
fn test_show_future_event_counts_down() {
    let db_path = setup_test_db("cli_show_future");
    init_db_with_data(&db_path);

    mt().args([
        "--db",
        &db_path,
        "--lang",
        "en",
        "--now",
        "2025-06-15 18:00",
        "show",
        "2",
    ])
    .assert()
    .success()
    .stdout(contains("Until"))
    .stdout(contains("Minutes"))
    .stdout(contains("30 minutes ago"));
}

#[test]
fn test_show_missing_id_is_noop() {
    let db_path = setup_test_db("cli_show_missing");
    init_db(&db_path);

    mt().args(["--db", &db_path, "show", "42"])
        .assert()
        .success()
        .stdout(contains("not found"));
}

#[test]
fn test_show_watch_stops_after_ticks() {
    let db_path = setup_test_db("cli_watch");
    init_db_with_data(&db_path);

    let out = mt()
        .args([
            "--db",
            &db_path,
            "--lang",
            "fr",
            "--now",
            "2025-01-02 01:02:03",
            "show",
            "1",
            "--watch",
            "--ticks",
            "2",
        ])
        .output()
        .expect("failed to run show --watch");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.matches("Vacances").count(), 2);

    // the second frame is one second later than the first
    let first = stdout
        .find("    2     |    3     |")
        .expect("first frame at 01:02:03");
    let second = stdout
        .find("    2     |    4     |")
        .expect("second frame at 01:02:04");
    assert!(first < second);
}

#[test]
fn test_edit_name_and_date() {
    let db_path = setup_test_db("cli_edit");
    init_db_with_data(&db_path);

    mt().args([
        "--db",
        &db_path,
        "edit",
        "1",
        "--name",
        "Congés",
        "--at",
        "2025-03-01 08:00",
    ])
    .assert()
    .success();

    mt().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Congés"))
        .stdout(contains("01/03/2025 08:00"))
        .stdout(contains("Vacances").not());
}

#[test]
fn test_edit_empty_name_fails() {
    let db_path = setup_test_db("cli_edit_empty");
    init_db_with_data(&db_path);

    mt().args(["--db", &db_path, "edit", "1", "--name", ""])
        .assert()
        .failure()
        .stderr(contains("cannot be empty"));
}

#[test]
fn test_edit_missing_id_is_noop() {
    let db_path = setup_test_db("cli_edit_missing");
    init_db(&db_path);

    mt().args(["--db", &db_path, "edit", "7", "--name", "x"])
        .assert()
        .success()
        .stdout(contains("not found"));
}

#[test]
fn test_edit_missing_id_with_empty_name_is_noop() {
    let db_path = setup_test_db("cli_edit_missing_empty");
    init_db(&db_path);

    mt().args(["--db", &db_path, "edit", "999", "--name", ""])
        .assert()
        .success()
        .stdout(contains("not found"));
}

#[test]
fn test_reset_restarts_counter() {
    let db_path = setup_test_db("cli_reset");
    init_db_with_data(&db_path);

    mt().args(["--db", &db_path, "--now", "2025-08-01 10:00", "reset", "1"])
        .assert()
        .success()
        .stdout(contains("Vacances"));

    mt().args([
        "--db",
        &db_path,
        "--lang",
        "fr",
        "--now",
        "2025-08-01 10:00",
        "show",
        "1",
    ])
    .assert()
    .success()
    .stdout(contains("Vacances"))
    .stdout(contains("À l'instant"));
}

#[test]
fn test_del_with_yes_removes_event() {
    let db_path = setup_test_db("cli_del");
    init_db_with_data(&db_path);

    mt().args(["--db", &db_path, "del", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    mt().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Vacances"))
        .stdout(contains("Anniversaire").not());
}

#[test]
fn test_del_cancelled_without_confirmation() {
    let db_path = setup_test_db("cli_del_cancel");
    init_db_with_data(&db_path);

    mt().args(["--db", &db_path, "del", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));

    mt().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Anniversaire"));
}

#[test]
fn test_export_json_and_csv() {
    let db_path = setup_test_db("cli_export");
    init_db_with_data(&db_path);

    let json_out = temp_out("cli_export", "json");
    mt().args(["--db", &db_path, "export", "--format", "json", "--file", &json_out])
        .assert()
        .success();
    let json = fs::read_to_string(&json_out).expect("json written");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(2));
    assert!(json.contains("\"name\": \"Anniversaire\""));

    let csv_out = temp_out("cli_export", "csv");
    mt().args(["--db", &db_path, "export", "--format", "csv", "--file", &csv_out])
        .assert()
        .success();
    let csv = fs::read_to_string(&csv_out).expect("csv written");
    assert!(csv.starts_with("id,name,timestamp"));
    assert!(csv.contains("Vacances"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("cli_export_force");
    init_db_with_data(&db_path);

    let out = temp_out("cli_export_force", "csv");
    fs::write(&out, "keep me").unwrap();

    mt().args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    mt().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("Anniversaire"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("cli_backup");
    init_db_with_data(&db_path);

    let plain = temp_out("cli_backup", "sqlite");
    mt().args(["--db", &db_path, "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(fs::metadata(&plain).is_ok());

    let zipped = temp_out("cli_backup_zip", "sqlite");
    let zip_path = zipped.replace(".sqlite", ".zip");
    fs::remove_file(&zip_path).ok();
    mt().args(["--db", &db_path, "backup", "--file", &zipped, "--compress"])
        .assert()
        .success();
    assert!(fs::metadata(&zip_path).is_ok());
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);
    mt().args(["--db", &db_path, "reset", "1"]).assert().success();

    mt().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("reset"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_db_with_data(&db_path);

    mt().args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total events:"))
        .stdout(contains("Integrity check passed"));
}
