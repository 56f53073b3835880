#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, Local, NaiveDate};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rr() -> Command {
    cargo_bin_cmd!("rreserve")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rreserve.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn in_days(n: i64) -> String {
    iso(today() + Duration::days(n))
}

/// Run `rreserve --db <db> <args…>` and expect success.
pub fn step_ok(db_path: &str, args: &[&str]) {
    rr().args(["--db", db_path]).args(args).assert().success();
}

/// Walk a fresh booking up to (and including) the table step.
pub fn book_until_table(db_path: &str) {
    step_ok(db_path, &["start"]);
    let date = in_days(3);
    step_ok(
        db_path,
        &[
            "user",
            "--name",
            "Asha",
            "--phone",
            "9876543210",
            "--date",
            &date,
            "--people",
            "4",
            "--time",
            "7 PM",
        ],
    );
    step_ok(db_path, &["location", "Indiranagar"]);
    step_ok(db_path, &["pricerange", "₹500-₹2000"]);
    step_ok(db_path, &["cuisine", "Italian"]);
    step_ok(db_path, &["ambience", "Fine Dining"]);
    step_ok(db_path, &["restaurant", "Karavalli @ Taj"]);
    step_ok(db_path, &["table", "7"]);
}
