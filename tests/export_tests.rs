use predicates::str::contains;
use std::fs;

mod common;
use common::{add_company, add_entry, init_db, init_db_with_data, rts, setup_test_db, temp_out};

#[test]
fn test_export_csv_report() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
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
            "8",
            "--overtime",
            "2",
            "--break",
            "1",
            "--notes",
            "Pezzo \"A\", lato sx",
        ])
        .assert()
        .success();

    rts()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--month", "2024-03", "--file", &out,
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();

    assert_eq!(
        lines.next(),
        Some(
            "\"Data\",\"Ditta\",\"Ore Normali\",\"Ore Straordinario\",\"Ore Pausa\",\"Codice Macchinario\",\"Note\",\"Compenso (€)\""
        )
    );
    assert_eq!(
        lines.next(),
        Some(
            "\"15/03/2024\",\"ACME\",\"8.00\",\"2.00\",\"1.00\",\"\",\"Pezzo \"\"A\"\", lato sx\",\"200.00\""
        )
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn test_export_json_report() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path);

    rts()
        .args([
            "--db", &db_path, "export", "--format", "json", "--month", "2024-03", "--file", &out,
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(doc["month"], "2024-03");
    assert_eq!(doc["companyFilter"], "all");
    assert_eq!(doc["entries"].as_array().map(Vec::len), Some(1));
    assert_eq!(doc["entries"][0]["companyName"], "ACME");
    assert_eq!(doc["entries"][0]["earnings"], 200.0);
    assert_eq!(doc["totals"]["totalHours"], 9.0);
    assert_eq!(doc["annualTotal"], 200.0);
}

#[test]
fn test_export_pdf_report() {
    let db_path = setup_test_db("export_pdf");
    let out = temp_out("export_pdf", "pdf");
    init_db_with_data(&db_path);
    add_company(&db_path, "Beta", "10");
    for day in 1..=28 {
        add_entry(&db_path, "Beta", &format!("2024-03-{day:02}"), "8", "0", "0");
    }

    rts()
        .args([
            "--db", &db_path, "export", "--format", "pdf", "--month", "2024-03", "--file", &out,
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_export_empty_month_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_db_with_data(&db_path);

    rts()
        .args([
            "--db", &db_path, "export", "--month", "2023-01", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("No entries to export for 2023-01"));

    assert!(fs::metadata(&out).is_err());
}
