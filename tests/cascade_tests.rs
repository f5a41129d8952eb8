use predicates::str::contains;

mod common;
use common::{init_db_with_codes, line_field, ok, report_json, rtl, setup_test_db};

const WELL: &str = "CASCADE-1";
const DAY: &str = "2025-04-02";

fn setup(name: &str) -> String {
    let db_path = setup_test_db(name);
    init_db_with_codes(&db_path);
    ok(
        &db_path,
        &[
            "add", WELL, DAY, "--from", "08:00", "--to", "10:00", "--main", "DRL", "--sub", "ROT",
        ],
    );
    db_path
}

#[test]
fn test_main_change_clears_sub_code() {
    let db_path = setup("cascade_clear");

    ok(&db_path, &["edit", WELL, DAY, "--line", "1", "--main", "CIR"]);

    let report = report_json(&db_path, WELL, DAY);
    assert_eq!(line_field(&report, 1, "code"), "CIR");
    assert!(line_field(&report, 1, "sub_code_ref").is_null());
}

#[test]
fn test_same_main_keeps_sub_code() {
    let db_path = setup("cascade_keep");

    ok(&db_path, &["edit", WELL, DAY, "--line", "1", "--main", "DRL"]);
    // twice: same result
    ok(&db_path, &["edit", WELL, DAY, "--line", "1", "--main", "DRL"]);

    let report = report_json(&db_path, WELL, DAY);
    assert_eq!(line_field(&report, 1, "code"), "DRL/ROT");
}

#[test]
fn test_sub_code_of_other_main_is_rejected() {
    let db_path = setup("cascade_reject");

    rtl()
        .args(["--db", &db_path, "edit", WELL, DAY, "--line", "1", "--sub", "BU"])
        .assert()
        .failure()
        .stderr(contains("Unknown sub code 'BU' for main code 'DRL'"));

    // nothing was saved
    let report = report_json(&db_path, WELL, DAY);
    assert_eq!(line_field(&report, 1, "code"), "DRL/ROT");
}

#[test]
fn test_main_and_sub_in_one_edit() {
    let db_path = setup("cascade_both");

    ok(&db_path, &["edit", WELL, DAY, "--line", "1", "--main", "CIR", "--sub", "BU"]);

    let report = report_json(&db_path, WELL, DAY);
    assert_eq!(line_field(&report, 1, "code"), "CIR/BU");
}

#[test]
fn test_sub_without_main_is_rejected() {
    let db_path = setup("cascade_nomain");

    rtl()
        .args(["--db", &db_path, "add", WELL, DAY, "--sub", "ROT"])
        .assert()
        .failure()
        .stderr(contains("requires a main code"));

    let report = report_json(&db_path, WELL, DAY);
    assert_eq!(report["lines"].as_array().map(|l| l.len()), Some(1));
}

#[test]
fn test_clear_main_and_sub() {
    let db_path = setup("cascade_none");

    ok(&db_path, &["edit", WELL, DAY, "--line", "1", "--clear-sub"]);
    let report = report_json(&db_path, WELL, DAY);
    assert_eq!(line_field(&report, 1, "code"), "DRL");

    ok(&db_path, &["edit", WELL, DAY, "--line", "1", "--main", "none"]);
    let report = report_json(&db_path, WELL, DAY);
    assert_eq!(line_field(&report, 1, "code"), "--");
}

#[test]
fn test_bad_time_edit_keeps_duration() {
    let db_path = setup("cascade_bad_time");

    ok(&db_path, &["edit", WELL, DAY, "--line", "1", "--to", "1o:30"]);

    let report = report_json(&db_path, WELL, DAY);
    assert_eq!(line_field(&report, 1, "to_time"), "1o:30");
    assert_eq!(line_field(&report, 1, "duration_minutes"), 120);

    ok(&db_path, &["edit", WELL, DAY, "--line", "1", "--to", "10:30"]);
    let report = report_json(&db_path, WELL, DAY);
    assert_eq!(line_field(&report, 1, "to_time"), "10:30:00");
    assert_eq!(line_field(&report, 1, "duration_minutes"), 150);
}
