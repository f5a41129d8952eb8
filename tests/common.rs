#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtl() -> Command {
    cargo_bin_cmd!("rigtimelog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rigtimelog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Run a command against `db_path` and assert success.
pub fn ok(db_path: &str, args: &[&str]) {
    let mut full = vec!["--db", db_path];
    full.extend_from_slice(args);
    rtl().args(&full).assert().success();
}

/// Initialize DB and a small activity code taxonomy:
/// DRL (ROT, SLD), CIR (BU), RIG (REP)
pub fn init_db_with_codes(db_path: &str) {
    ok(db_path, &["--test", "init"]);

    ok(db_path, &["code", "add-main", "DRL", "Drilling"]);
    ok(db_path, &["code", "add-main", "CIR", "Circulating"]);
    ok(db_path, &["code", "add-main", "RIG", "Rig repair"]);

    ok(db_path, &["code", "add-sub", "DRL", "ROT", "Rotary drilling"]);
    ok(db_path, &["code", "add-sub", "DRL", "SLD", "Sliding"]);
    ok(db_path, &["code", "add-sub", "CIR", "BU", "Bottoms up"]);
    ok(db_path, &["code", "add-sub", "RIG", "REP", "Repair"]);
}

/// `list --json` parsed into a JSON value.
pub fn report_json(db_path: &str, well: &str, date: &str) -> serde_json::Value {
    let out = rtl()
        .args(["--db", db_path, "list", well, date, "--json"])
        .output()
        .expect("failed to run list --json");
    assert!(out.status.success(), "list --json failed: {:?}", out);
    serde_json::from_slice(&out.stdout).expect("list --json did not print JSON")
}

/// Convenience accessor: field of line `n` (1-based) of a `list --json` value.
pub fn line_field<'a>(
    report: &'a serde_json::Value,
    n: usize,
    field: &str,
) -> &'a serde_json::Value {
    &report["lines"][n - 1][field]
}
