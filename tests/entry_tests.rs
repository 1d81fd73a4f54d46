use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{add_company, init_db, init_db_with_data, rts, setup_test_db, temp_out};

/// Entry id printed by `add`: `Work entry saved → id <uuid>`.
fn saved_id(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    text.lines()
        .find_map(|l| l.split("→ id ").nth(1))
        .map(|id| id.trim().to_string())
        .expect("entry id in output")
}

#[test]
fn test_add_entry_success() {
    let db_path = setup_test_db("entry_add");
    init_db(&db_path);
    add_company(&db_path, "ACME", "20");

    rts()
        .args([
            "--db",
            &db_path,
            "add",
            "-c",
            "ACME",
            "-d",
            "2024-03-15",
            "--regular",
            "7,5",
            "--machine",
            "M-42",
            "--notes",
            "Revisione",
        ])
        .assert()
        .success()
        .stdout(contains("Work entry saved"))
        .stdout(contains("2024-03-15"))
        .stdout(contains("7.50"))
        .stdout(contains("M-42"));
}

#[test]
fn test_add_entry_requires_hours() {
    let db_path = setup_test_db("entry_add_no_hours");
    init_db(&db_path);
    add_company(&db_path, "ACME", "20");

    rts()
        .args(["--db", &db_path, "add", "-c", "ACME", "-d", "2024-03-15"])
        .assert()
        .failure()
        .stderr(contains("Missing required field: regular or overtime hours"));
}

#[test]
fn test_add_entry_requires_company() {
    let db_path = setup_test_db("entry_add_no_company");
    init_db(&db_path);

    rts()
        .args(["--db", &db_path, "add", "-d", "2024-03-15", "--regular", "8"])
        .assert()
        .failure()
        .stderr(contains("Missing required field: company"));

    rts()
        .args([
            "--db", &db_path, "add", "-c", "Ghost", "-d", "2024-03-15", "--regular", "8",
        ])
        .assert()
        .failure()
        .stderr(contains("Company not found: Ghost"));
}

#[test]
fn test_add_entry_rejects_bad_values() {
    let db_path = setup_test_db("entry_add_bad_values");
    init_db(&db_path);
    add_company(&db_path, "ACME", "20");

    rts()
        .args([
            "--db", &db_path, "add", "-c", "ACME", "-d", "2024-03-15", "--regular=-2",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid hours value for regular"));

    rts()
        .args([
            "--db", &db_path, "add", "-c", "ACME", "-d", "15/03/2024", "--regular", "8",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_overtime_only_entry_is_accepted() {
    let db_path = setup_test_db("entry_overtime_only");
    init_db(&db_path);
    add_company(&db_path, "ACME", "20");

    rts()
        .args([
            "--db", &db_path, "add", "-c", "ACME", "-d", "2024-03-15", "--overtime", "2",
        ])
        .assert()
        .success();

    // 2 × 20 × 1.5
    rts()
        .args(["--db", &db_path, "report", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("60.00"));
}

#[test]
fn test_edit_entry_updates_hours_and_appends_dictation() {
    let db_path = setup_test_db("entry_edit");
    init_db(&db_path);
    add_company(&db_path, "ACME", "20");

    let out = rts()
        .args([
            "--db", &db_path, "add", "-c", "ACME", "-d", "2024-03-15", "--regular", "8",
            "--notes", "Cambio olio",
        ])
        .output()
        .expect("run add");
    assert!(out.status.success());
    let id = saved_id(&out.stdout);

    rts()
        .args([
            "--db",
            &db_path,
            "edit",
            &id,
            "--regular",
            "4",
            "--dictated",
            "filtro sostituito",
        ])
        .assert()
        .success()
        .stdout(contains("updated"))
        .stdout(contains("Cambio olio filtro sostituito"));

    rts()
        .args(["--db", &db_path, "report", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("80.00"));
}

#[test]
fn test_dictation_from_stdin() {
    let db_path = setup_test_db("entry_dictation_stdin");
    init_db(&db_path);
    add_company(&db_path, "ACME", "20");

    rts()
        .args([
            "--db", &db_path, "add", "-c", "ACME", "-d", "2024-03-15", "--regular", "8",
            "--dictated", "-",
        ])
        .write_stdin("controllo pressione\n")
        .assert()
        .success()
        .stdout(contains("controllo pressione"));
}

#[test]
fn test_attach_photo() {
    let db_path = setup_test_db("entry_photo");
    init_db(&db_path);
    add_company(&db_path, "ACME", "20");

    let photo = temp_out("entry_photo", "png");
    fs::write(&photo, [0x89, b'P', b'N', b'G']).expect("write photo");

    rts()
        .args([
            "--db", &db_path, "add", "-c", "ACME", "-d", "2024-03-15", "--regular", "8",
            "--photo", &photo,
        ])
        .assert()
        .success()
        .stdout(contains("📷"));

    rts()
        .args(["--db", &db_path, "report", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("image/png"));
}

#[test]
fn test_delete_entry() {
    let db_path = setup_test_db("entry_del");
    init_db(&db_path);
    add_company(&db_path, "ACME", "20");

    let out = rts()
        .args([
            "--db", &db_path, "add", "-c", "ACME", "-d", "2024-03-15", "--regular", "8",
        ])
        .output()
        .expect("run add");
    let id = saved_id(&out.stdout);

    rts()
        .args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    rts()
        .args(["--db", &db_path, "report", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("No work entries for 2024-03"));

    rts()
        .args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .failure()
        .stderr(contains("Work entry not found"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("entry_log");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("company_add"))
        .stdout(contains("2024-03-15 ACME"));
}
