use crate::models::{CalculatedEntry, Company, WorkEntry};
use std::collections::HashMap;

/// Overtime is always paid at 1.5× the hourly rate.
pub const OVERTIME_MULTIPLIER: f64 = 1.5;

/// Regular hours minus break, floored at zero. Break never reduces overtime.
pub fn paid_regular_hours(entry: &WorkEntry) -> f64 {
    (entry.regular_hours - entry.break_hours).max(0.0)
}

pub fn net_hours(entry: &WorkEntry) -> f64 {
    paid_regular_hours(entry) + entry.overtime_hours
}

/// Unrounded earnings for one entry at `hourly_rate`.
pub fn earnings(entry: &WorkEntry, hourly_rate: f64) -> f64 {
    paid_regular_hours(entry) * hourly_rate
        + entry.overtime_hours * hourly_rate * OVERTIME_MULTIPLIER
}

/// Join one entry to its company. `None` when the company is missing (orphaned entry).
pub fn calculate_entry(entry: &WorkEntry, company: Option<&Company>) -> Option<CalculatedEntry> {
    let company = company?;

    Some(CalculatedEntry {
        entry: entry.clone(),
        company_name: company.name.clone(),
        hourly_rate: company.hourly_rate,
        net_hours: net_hours(entry),
        earnings: earnings(entry, company.hourly_rate),
    })
}

/// Enrich every entry, dropping orphans, sorted by date (stable).
pub fn calculate_all(companies: &[Company], entries: &[WorkEntry]) -> Vec<CalculatedEntry> {
    let by_id: HashMap<&str, &Company> = companies.iter().map(|c| (c.id.as_str(), c)).collect();

    let mut out: Vec<CalculatedEntry> = entries
        .iter()
        .filter_map(|e| calculate_entry(e, by_id.get(e.company_id.as_str()).copied()))
        .collect();

    out.sort_by_key(|c| c.entry.date);
    out
}
