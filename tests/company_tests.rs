use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_company, add_entry, init_db, rts, setup_test_db};

#[test]
fn test_company_add_and_list() {
    let db_path = setup_test_db("company_add_list");
    init_db(&db_path);

    rts()
        .args([
            "--db", &db_path, "company", "add", "--name", "ACME", "--rate", "22,50",
        ])
        .assert()
        .success()
        .stdout(contains("Company 'ACME' added"))
        .stdout(contains("22.50"));

    rts()
        .args(["--db", &db_path, "company", "list"])
        .assert()
        .success()
        .stdout(contains("ACME"))
        .stdout(contains("22.50"));
}

#[test]
fn test_company_add_requires_name_and_rate() {
    let db_path = setup_test_db("company_add_missing");
    init_db(&db_path);

    rts()
        .args(["--db", &db_path, "company", "add", "--rate", "20"])
        .assert()
        .failure()
        .stderr(contains("Missing required field: name"));

    rts()
        .args(["--db", &db_path, "company", "add", "--name", "ACME"])
        .assert()
        .failure()
        .stderr(contains("Missing required field: rate"));

    rts()
        .args([
            "--db", &db_path, "company", "add", "--name", "ACME", "--rate", "abc",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid hourly rate"));

    rts()
        .args(["--db", &db_path, "company", "list"])
        .assert()
        .success()
        .stdout(contains("No companies registered"));
}

#[test]
fn test_company_edit_changes_rate() {
    let db_path = setup_test_db("company_edit");
    init_db(&db_path);
    add_company(&db_path, "ACME", "20");

    rts()
        .args(["--db", &db_path, "company", "edit", "acme", "--rate", "30"])
        .assert()
        .success()
        .stdout(contains("Company 'ACME' updated"));

    add_entry(&db_path, "ACME", "2024-03-15", "8", "0", "0");

    // new rate applies to the existing entry: 8 × 30
    rts()
        .args(["--db", &db_path, "report", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("240.00"));
}

#[test]
fn test_company_delete_cascades_entries() {
    let db_path = setup_test_db("company_del_cascade");
    init_db(&db_path);
    add_company(&db_path, "ACME", "20");
    add_company(&db_path, "Beta", "10");
    add_entry(&db_path, "ACME", "2024-03-15", "8", "0", "0");
    add_entry(&db_path, "ACME", "2024-03-16", "4", "0", "0");
    add_entry(&db_path, "Beta", "2024-03-16", "5", "0", "0");

    rts()
        .args(["--db", &db_path, "company", "del", "ACME", "--yes"])
        .assert()
        .success()
        .stdout(contains("2 work entries removed"));

    rts()
        .args(["--db", &db_path, "report", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("Beta"))
        .stdout(contains("50.00"))
        .stdout(contains("ACME").not());
}

#[test]
fn test_company_delete_unknown_fails() {
    let db_path = setup_test_db("company_del_unknown");
    init_db(&db_path);

    rts()
        .args(["--db", &db_path, "company", "del", "Nobody", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Company not found: Nobody"));
}
