use predicates::str::contains;

mod common;
use common::{init_db_with_codes, line_field, ok, report_json, rtl, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    rtl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    for table in ["log", "main_codes", "sub_codes", "daily_reports", "time_logs"] {
        let n: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(n, 1, "missing table {table}");
    }

    // second init is a no-op for the schema
    ok(&db_path, &["--test", "init"]);
}

#[test]
fn test_code_list_shows_taxonomy() {
    let db_path = setup_test_db("code_list");
    init_db_with_codes(&db_path);

    rtl()
        .args(["--db", &db_path, "code", "list"])
        .assert()
        .success()
        .stdout(contains("DRL"))
        .stdout(contains("Rotary drilling"))
        .stdout(contains("Bottoms up"));
}

#[test]
fn test_duplicate_main_code_fails() {
    let db_path = setup_test_db("dup_main");
    init_db_with_codes(&db_path);

    rtl()
        .args(["--db", &db_path, "code", "add-main", "drl", "Again"])
        .assert()
        .failure()
        .stderr(contains("Code already exists"));
}

#[test]
fn test_add_computes_durations() {
    let db_path = setup_test_db("add_durations");
    init_db_with_codes(&db_path);

    ok(
        &db_path,
        &[
            "add",
            "WELL-1",
            "2025-03-14",
            "--from",
            "08:00",
            "--to",
            "10:30",
            "--main",
            "DRL",
            "--sub",
            "ROT",
        ],
    );
    ok(
        &db_path,
        &[
            "add",
            "WELL-1",
            "2025-03-14",
            "--from",
            "23:30:00",
            "--to",
            "00:15:00",
            "--main",
            "CIR",
        ],
    );
    ok(&db_path, &["add", "WELL-1", "2025-03-14", "--from", "10:00:45", "--to", "10:01:10"]);

    let report = report_json(&db_path, "WELL-1", "2025-03-14");

    assert_eq!(line_field(&report, 1, "duration_minutes"), 150);
    assert_eq!(line_field(&report, 1, "code"), "DRL/ROT");
    assert_eq!(line_field(&report, 2, "duration_minutes"), 45);
    assert_eq!(line_field(&report, 2, "code"), "CIR");
    assert_eq!(line_field(&report, 3, "duration_minutes"), 0);
    assert_eq!(report["summary"]["total_minutes"], 195);
}

#[test]
fn test_add_blank_line_starts_at_zero() {
    let db_path = setup_test_db("add_blank");
    init_db_with_codes(&db_path);

    ok(&db_path, &["add", "WELL-1", "2025-03-15"]);

    let report = report_json(&db_path, "WELL-1", "2025-03-15");
    assert_eq!(line_field(&report, 1, "duration_minutes"), 0);
    assert!(line_field(&report, 1, "main_code_ref").is_null());
    assert!(line_field(&report, 1, "sub_code_ref").is_null());
    assert_eq!(line_field(&report, 1, "is_npt"), false);
}

#[test]
fn test_list_table_and_npt_totals() {
    let db_path = setup_test_db("list_npt");
    init_db_with_codes(&db_path);

    ok(
        &db_path,
        &[
            "add",
            "WELL-2",
            "2025-03-14",
            "--from",
            "06:00",
            "--to",
            "12:00",
            "--main",
            "DRL",
            "--desc",
            "Drill 12 1/4 section",
        ],
    );
    ok(
        &db_path,
        &[
            "add",
            "WELL-2",
            "2025-03-14",
            "--from",
            "12:00",
            "--to",
            "13:30",
            "--main",
            "RIG",
            "--sub",
            "REP",
            "--npt",
        ],
    );

    rtl()
        .args(["--db", &db_path, "list", "WELL-2", "2025-03-14"])
        .assert()
        .success()
        .stdout(contains("WELL-2 @ 2025-03-14"))
        .stdout(contains("Drill 12 1/4 section"))
        .stdout(contains("RIG/REP"))
        .stdout(contains("Total: 07h 30m"))
        .stdout(contains("NPT: 01h 30m"));

    let report = report_json(&db_path, "WELL-2", "2025-03-14");
    assert_eq!(report["summary"]["npt_minutes"], 90);
    assert_eq!(report["summary"]["productive_minutes"], 360);
}

#[test]
fn test_list_unknown_report_fails() {
    let db_path = setup_test_db("list_unknown");
    init_db_with_codes(&db_path);

    rtl()
        .args(["--db", &db_path, "list", "NOWHERE", "2025-03-14"])
        .assert()
        .failure()
        .stderr(contains("No daily report"));
}

#[test]
fn test_invalid_date_is_rejected() {
    let db_path = setup_test_db("bad_date");
    init_db_with_codes(&db_path);

    rtl()
        .args(["--db", &db_path, "add", "WELL-1", "14/03/2025", "--from", "08:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("audit_log");
    init_db_with_codes(&db_path);

    ok(&db_path, &["add", "WELL-1", "2025-03-14", "--from", "08:00", "--to", "09:00"]);
    ok(&db_path, &["edit", "WELL-1", "2025-03-14", "--line", "1", "--to", "09:30"]);

    rtl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("WELL-1 @ 2025-03-14"))
        .stdout(contains("Line 1 updated (to=09:30)"));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_check");
    init_db_with_codes(&db_path);

    ok(
        &db_path,
        &[
            "add",
            "WELL-9",
            "2025-06-01",
            "--from",
            "01:00",
            "--to",
            "02:00",
            "--main",
            "DRL",
            "--sub",
            "SLD",
        ],
    );
    ok(&db_path, &["edit", "WELL-9", "2025-06-01", "--line", "1", "--main", "CIR"]);

    rtl()
        .args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Time log entries:"));
}
