#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    rts()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_company(db_path: &str, name: &str, rate: &str) {
    rts()
        .args([
            "--db", db_path, "company", "add", "--name", name, "--rate", rate,
        ])
        .assert()
        .success();
}

pub fn add_entry(db_path: &str, company: &str, date: &str, regular: &str, overtime: &str, brk: &str) {
    rts()
        .args([
            "--db",
            db_path,
            "add",
            "--company",
            company,
            "--date",
            date,
            "--regular",
            regular,
            "--overtime",
            overtime,
            "--break",
            brk,
        ])
        .assert()
        .success();
}

/// One company (ACME, 20/h) with one entry worth 200.00 on 2024-03-15.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_company(db_path, "ACME", "20");
    add_entry(db_path, "ACME", "2024-03-15", "8", "2", "1");
}
