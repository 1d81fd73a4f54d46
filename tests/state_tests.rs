use chrono::NaiveDate;
use rtimesheet::core::backup::{BackupLogic, ImportLogic};
use rtimesheet::core::calculator::calculate_all;
use rtimesheet::core::dictation::{Transcript, append_transcript};
use rtimesheet::core::report::{MonthlyReport, available_months};
use rtimesheet::core::state::TimesheetState;
use rtimesheet::db::initialize::init_db;
use rtimesheet::db::pool::DbPool;
use rtimesheet::db::store::{WORK_ENTRIES_KEY, load_state, put_raw, save_state};
use rtimesheet::errors::AppError;
use rtimesheet::export::csv_report::write_report_csv;
use rtimesheet::models::{CompanyFilter, NewCompany, NewWorkEntry, YearMonth};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

fn new_company(name: &str, rate: f64) -> NewCompany {
    NewCompany {
        name: name.into(),
        hourly_rate: rate,
    }
}

fn new_entry(company_id: &str, d: &str, reg: Option<f64>, ot: Option<f64>) -> NewWorkEntry {
    NewWorkEntry {
        company_id: company_id.into(),
        date: Some(date(d)),
        regular_hours: reg,
        overtime_hours: ot,
        ..Default::default()
    }
}

/// ACME (20/h) with one entry on 2024-03-15: 8 regular, 2 overtime, 1 break.
fn sample_state() -> TimesheetState {
    let (state, acme) = TimesheetState::default()
        .with_company_added(new_company("ACME", 20.0))
        .expect("company");
    let mut input = new_entry(&acme.id, "2024-03-15", Some(8.0), Some(2.0));
    input.break_hours = Some(1.0);
    input.notes = "Revisione \"pompa\"".into();
    let (state, _) = state.with_entry_added(input).expect("entry");
    state
}

#[test]
fn test_mutations_leave_original_untouched() {
    let base = TimesheetState::default();
    let (next, acme) = base
        .with_company_added(new_company("  ACME  ", 20.0))
        .expect("company");

    assert!(base.companies.is_empty());
    assert_eq!(next.companies.len(), 1);
    assert_eq!(acme.name, "ACME");
    assert!(!acme.id.is_empty());
}

#[test]
fn test_ids_are_unique() {
    let (s, a) = TimesheetState::default()
        .with_company_added(new_company("A", 1.0))
        .expect("a");
    let (_, b) = s.with_company_added(new_company("B", 1.0)).expect("b");
    assert_ne!(a.id, b.id);
}

#[test]
fn test_rejected_entries_change_nothing() {
    let state = sample_state();
    let acme_id = state.companies[0].id.clone();

    let no_hours = state.with_entry_added(new_entry(&acme_id, "2024-03-16", None, None));
    assert!(matches!(no_hours, Err(AppError::MissingField(_))));

    let mut no_date = new_entry(&acme_id, "2024-03-16", Some(8.0), None);
    no_date.date = None;
    assert!(matches!(
        state.with_entry_added(no_date),
        Err(AppError::MissingField(_))
    ));

    let unknown = state.with_entry_added(new_entry("ghost", "2024-03-16", Some(8.0), None));
    assert!(matches!(unknown, Err(AppError::CompanyNotFound(_))));

    let negative = state.with_entry_added(new_entry(&acme_id, "2024-03-16", Some(-1.0), None));
    assert!(matches!(negative, Err(AppError::InvalidHours { .. })));

    assert!(matches!(
        state.with_company_added(new_company(" ", 10.0)),
        Err(AppError::MissingField(_))
    ));

    assert_eq!(state.work_entries.len(), 1);
}

#[test]
fn test_company_delete_cascades() {
    let state = sample_state();
    let acme_id = state.companies[0].id.clone();
    let (state, beta) = state
        .with_company_added(new_company("Beta", 10.0))
        .expect("beta");
    let (state, _) = state
        .with_entry_added(new_entry(&beta.id, "2024-03-20", Some(4.0), None))
        .expect("beta entry");

    let (after, removed) = state.with_company_deleted(&acme_id).expect("delete");
    assert_eq!(removed, 1);
    assert_eq!(after.companies.len(), 1);
    assert!(after.work_entries.iter().all(|e| e.company_id == beta.id));

    assert!(matches!(
        after.with_company_deleted(&acme_id),
        Err(AppError::CompanyNotFound(_))
    ));
}

#[test]
fn test_entry_update_and_delete() {
    let state = sample_state();
    let mut entry = state.work_entries[0].clone();
    entry.regular_hours = 4.0;

    let updated = state.with_entry_updated(entry.clone()).expect("update");
    assert_eq!(updated.work_entries[0].regular_hours, 4.0);
    assert_eq!(state.work_entries[0].regular_hours, 8.0);

    let deleted = updated.with_entry_deleted(&entry.id).expect("delete");
    assert!(deleted.work_entries.is_empty());
    assert!(matches!(
        deleted.with_entry_deleted(&entry.id),
        Err(AppError::EntryNotFound(_))
    ));
}

#[test]
fn test_monthly_report() {
    let state = sample_state();
    let march = YearMonth::new(2024, 3).expect("month");

    let report = MonthlyReport::build(&state, march, CompanyFilter::All);
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.totals.earnings, 200.0);
    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.annual_total, 200.0);

    let april = YearMonth::new(2024, 4).expect("month");
    let empty = MonthlyReport::build(&state, april, CompanyFilter::All);
    assert!(empty.is_empty());
    assert_eq!(empty.annual_total, 200.0);

    assert_eq!(available_months(&state), vec![march]);
}

#[test]
fn test_csv_quotes_every_field() {
    let state = sample_state();
    let march = YearMonth::new(2024, 3).expect("month");
    let report = MonthlyReport::build(&state, march, CompanyFilter::All);

    let mut buf = Vec::new();
    write_report_csv(&mut buf, &report).expect("csv");
    let text = String::from_utf8(buf).expect("utf8");

    assert!(text.starts_with("\"Data\",\"Ditta\","));
    assert!(text.contains(
        "\"15/03/2024\",\"ACME\",\"8.00\",\"2.00\",\"1.00\",\"\",\"Revisione \"\"pompa\"\"\",\"200.00\""
    ));
}

#[test]
fn test_backup_document_round_trip() {
    let state = sample_state();
    let json = BackupLogic::to_json(&state).expect("json");

    assert!(json.contains("\"companies\""));
    assert!(json.contains("\"workEntries\""));
    assert!(json.contains("\"hourlyRate\""));

    let parsed = ImportLogic::parse(&json).expect("parse");
    assert_eq!(parsed, state);
}

#[test]
fn test_backup_validation() {
    let cases = [
        "[]",
        r#"{"workEntries": []}"#,
        r#"{"companies": [], "workEntries": "x"}"#,
        r#"{"companies": [{"id": "c1"}], "workEntries": []}"#,
        "{",
    ];

    for text in cases {
        assert!(
            matches!(ImportLogic::parse(text), Err(AppError::InvalidBackup(_))),
            "accepted: {text}"
        );
    }

    let ok = ImportLogic::parse(r#"{"companies": [], "workEntries": []}"#).expect("empty backup");
    assert!(ok.companies.is_empty());
}

#[test]
fn test_store_save_and_load() {
    let mut pool = DbPool::in_memory().expect("db");
    assert_eq!(load_state(&pool).expect("load"), TimesheetState::default());

    let state = sample_state();
    save_state(&mut pool, &state).expect("save");
    assert_eq!(load_state(&pool).expect("load"), state);
}

#[test]
fn test_store_malformed_value_loads_empty() {
    let mut pool = DbPool::in_memory().expect("db");
    let state = sample_state();
    save_state(&mut pool, &state).expect("save");

    put_raw(&pool.conn, WORK_ENTRIES_KEY, "{not json").expect("corrupt");

    let loaded = load_state(&pool).expect("load");
    assert!(loaded.work_entries.is_empty());
    assert_eq!(loaded.companies, state.companies);
}

#[test]
fn test_append_transcript() {
    let t = Transcript::new("  sostituito filtro ");
    assert_eq!(append_transcript("", &t), "sostituito filtro");
    assert_eq!(append_transcript("Cambio olio", &t), "Cambio olio sostituito filtro");
    assert_eq!(append_transcript("Cambio olio", &Transcript::new("   ")), "Cambio olio");
}

#[test]
fn test_backup_rejects_out_of_range_values() {
    let cases = [
        r#"{"companies": [{"id": "c1", "name": "", "hourlyRate": 20}], "workEntries": []}"#,
        r#"{"companies": [{"id": "c1", "name": "ACME", "hourlyRate": -20}], "workEntries": []}"#,
        r#"{"companies": [{"id": "c1", "name": "ACME", "hourlyRate": 20}],
            "workEntries": [{"id": "e1", "companyId": "c1", "date": "2024-03-15",
                             "regularHours": 0, "overtimeHours": -5, "breakHours": 0}]}"#,
        r#"{"companies": [{"id": "c1", "name": "ACME", "hourlyRate": 20}],
            "workEntries": [{"id": "e1", "companyId": "c1", "date": "2024-03-15",
                             "regularHours": 8, "overtimeHours": 0, "breakHours": -1}]}"#,
    ];

    for text in cases {
        assert!(
            matches!(ImportLogic::parse(text), Err(AppError::InvalidBackup(_))),
            "accepted: {text}"
        );
    }
}

#[test]
fn test_imported_state_keeps_net_hours_non_negative() {
    let text = r#"{"companies": [{"id": "c1", "name": "ACME", "hourlyRate": 20}],
        "workEntries": [
            {"id": "e1", "companyId": "c1", "date": "2024-03-15",
             "regularHours": 1, "overtimeHours": 2, "breakHours": 4},
            {"id": "e2", "companyId": "gone", "date": "2024-03-16", "regularHours": 3}
        ]}"#;

    let state = ImportLogic::parse(text).expect("valid backup");
    assert_eq!(state.work_entries.len(), 2);

    let calculated = calculate_all(&state.companies, &state.work_entries);
    assert_eq!(calculated.len(), 1);
    for c in &calculated {
        assert!(c.net_hours >= 0.0);
        assert!(c.net_hours >= c.entry.overtime_hours);
        assert!(c.earnings >= 0.0);
    }
}

#[test]
fn test_schema_setup_is_idempotent() {
    let mut pool = DbPool::in_memory().expect("db");
    let state = sample_state();
    save_state(&mut pool, &state).expect("save");

    init_db(&pool.conn).expect("second init");
    init_db(&pool.conn).expect("third init");

    assert_eq!(load_state(&pool).expect("load"), state);
}
