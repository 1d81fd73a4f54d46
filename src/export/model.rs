// src/export/model.rs

use crate::core::report::MonthlyReport;
use crate::models::CalculatedEntry;
use crate::utils::date::format_date_it;
use crate::utils::fmt_hours;
use serde::Serialize;

/// Flat report row for JSON export (no photo payload).
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReportRowExport {
    pub id: String,
    pub date: String,
    pub company_id: String,
    pub company_name: String,
    pub hourly_rate: f64,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub break_hours: f64,
    pub net_hours: f64,
    pub machine_code: String,
    pub notes: String,
    pub has_photo: bool,
    pub earnings: f64,
}

impl From<&CalculatedEntry> for ReportRowExport {
    fn from(c: &CalculatedEntry) -> Self {
        Self {
            id: c.entry.id.clone(),
            date: c.entry.date_str(),
            company_id: c.entry.company_id.clone(),
            company_name: c.company_name.clone(),
            hourly_rate: c.hourly_rate,
            regular_hours: c.entry.regular_hours,
            overtime_hours: c.entry.overtime_hours,
            break_hours: c.entry.break_hours,
            net_hours: c.net_hours,
            machine_code: c.entry.machine_code.clone(),
            notes: c.entry.notes.clone(),
            has_photo: c.entry.has_photo(),
            earnings: c.earnings,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GroupExport {
    pub company_id: String,
    pub company_name: String,
    pub entries: usize,
    pub subtotal: f64,
}

/// JSON document for `export --format json`.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReportExport {
    pub month: String,
    pub company_filter: String,
    pub entries: Vec<ReportRowExport>,
    pub groups: Vec<GroupExport>,
    pub totals: crate::core::calculator::Totals,
    pub month_total_all_companies: f64,
    pub annual_total: f64,
}

impl From<&MonthlyReport> for ReportExport {
    fn from(r: &MonthlyReport) -> Self {
        Self {
            month: r.month.to_string(),
            company_filter: match &r.filter {
                crate::models::CompanyFilter::All => "all".to_string(),
                crate::models::CompanyFilter::Only(id) => id.clone(),
            },
            entries: r.entries.iter().map(ReportRowExport::from).collect(),
            groups: r
                .groups
                .iter()
                .map(|g| GroupExport {
                    company_id: g.company_id.clone(),
                    company_name: g.company_name.clone(),
                    entries: g.entries.len(),
                    subtotal: g.subtotal,
                })
                .collect(),
            totals: r.totals,
            month_total_all_companies: r.month_total_all_companies,
            annual_total: r.annual_total,
        }
    }
}

/// Header per CSV
pub(crate) fn csv_headers() -> Vec<&'static str> {
    vec![
        "Data",
        "Ditta",
        "Ore Normali",
        "Ore Straordinario",
        "Ore Pausa",
        "Codice Macchinario",
        "Note",
        "Compenso (€)",
    ]
}

/// One CSV row: localized date, two-decimal numbers.
pub(crate) fn entry_to_csv_row(e: &CalculatedEntry) -> Vec<String> {
    vec![
        format_date_it(e.entry.date),
        e.company_name.clone(),
        fmt_hours(e.entry.regular_hours),
        fmt_hours(e.entry.overtime_hours),
        fmt_hours(e.entry.break_hours),
        e.entry.machine_code.clone(),
        e.entry.notes.clone(),
        format!("{:.2}", e.earnings),
    ]
}

/// Header per PDF (una sezione per ditta)
pub(crate) fn pdf_headers() -> Vec<&'static str> {
    vec!["Data", "Normali", "Straord.", "Pausa", "Nette", "Macchinario / Note", "Compenso"]
}

pub(crate) fn entry_to_pdf_row(e: &CalculatedEntry) -> Vec<String> {
    let code_notes = match (e.entry.machine_code.is_empty(), e.entry.notes.is_empty()) {
        (false, false) => format!("{} - {}", e.entry.machine_code, e.entry.notes),
        (false, true) => e.entry.machine_code.clone(),
        (true, _) => e.entry.notes.clone(),
    };

    vec![
        format_date_it(e.entry.date),
        fmt_hours(e.entry.regular_hours),
        fmt_hours(e.entry.overtime_hours),
        fmt_hours(e.entry.break_hours),
        fmt_hours(e.net_hours),
        code_notes,
        format!("{:.2}", e.earnings),
    ]
}
