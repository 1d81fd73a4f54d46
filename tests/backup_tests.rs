use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, init_db_with_data, rts, setup_test_db, temp_out};

#[test]
fn test_backup_then_import_round_trip() {
    let db_path = setup_test_db("backup_source");
    let restored_db = setup_test_db("backup_restored");
    let out = temp_out("backup_round_trip", "json");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "backup", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read backup")).expect("json");
    assert_eq!(doc["companies"][0]["name"], "ACME");
    assert_eq!(doc["companies"][0]["hourlyRate"], 20.0);
    assert_eq!(doc["workEntries"][0]["date"], "2024-03-15");
    assert_eq!(doc["workEntries"][0]["regularHours"], 8.0);

    init_db(&restored_db);
    rts()
        .args(["--db", &restored_db, "import", "--file", &out, "--yes"])
        .assert()
        .success()
        .stdout(contains("Import completed: 1 companies, 1 work entries"));

    rts()
        .args(["--db", &restored_db, "report", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("ACME"))
        .stdout(contains("200.00"));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_zip");
    let out = temp_out("backup_zip", "json");
    let zip_out = temp_out("backup_zip", "zip");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress", "--force"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(fs::metadata(&zip_out).is_ok());
    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_import_rejects_missing_collection() {
    let db_path = setup_test_db("import_invalid");
    let bad = temp_out("import_invalid", "json");
    init_db_with_data(&db_path);

    fs::write(&bad, r#"{"companies": []}"#).expect("write bad backup");

    rts()
        .args(["--db", &db_path, "import", "--file", &bad, "--yes"])
        .assert()
        .failure()
        .stderr(contains("Invalid backup file: missing 'workEntries' field"));

    // nothing was replaced
    rts()
        .args(["--db", &db_path, "report", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("200.00"));
}

#[test]
fn test_import_rejects_non_array_and_garbage() {
    let db_path = setup_test_db("import_garbage");
    let bad = temp_out("import_garbage", "json");
    init_db(&db_path);

    fs::write(&bad, r#"{"companies": {}, "workEntries": []}"#).expect("write");
    rts()
        .args(["--db", &db_path, "import", "--file", &bad, "--yes"])
        .assert()
        .failure()
        .stderr(contains("'companies' is not an array"));

    fs::write(&bad, "not json at all").expect("write");
    rts()
        .args(["--db", &db_path, "import", "--file", &bad, "--yes"])
        .assert()
        .failure()
        .stderr(contains("not valid JSON"));
}

#[test]
fn test_import_rejects_negative_hours() {
    let db_path = setup_test_db("import_negative_hours");
    let bad = temp_out("import_negative_hours", "json");
    init_db_with_data(&db_path);

    fs::write(
        &bad,
        r#"{"companies": [{"id": "c1", "name": "ACME", "hourlyRate": 20}],
            "workEntries": [{"id": "e1", "companyId": "c1", "date": "2024-03-15",
                             "regularHours": 0, "overtimeHours": -5, "breakHours": 0}]}"#,
    )
    .expect("write");

    rts()
        .args(["--db", &db_path, "import", "--file", &bad, "--yes"])
        .assert()
        .failure()
        .stderr(contains("Invalid backup file: work entry 'e1'"))
        .stderr(contains("Invalid hours value for overtime"));

    rts()
        .args(["--db", &db_path, "report", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("200.00"));
}
