use crate::models::{CalculatedEntry, YearMonth};
use chrono::Datelike;
use serde::Serialize;

/// Plain sums over a set of calculated entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub break_hours: f64,
    /// Sum of net hours.
    pub total_hours: f64,
    pub earnings: f64,
}

impl Totals {
    fn add(mut self, e: &CalculatedEntry) -> Self {
        self.regular_hours += e.entry.regular_hours;
        self.overtime_hours += e.entry.overtime_hours;
        self.break_hours += e.entry.break_hours;
        self.total_hours += e.net_hours;
        self.earnings += e.earnings;
        self
    }
}

pub fn aggregate(entries: &[CalculatedEntry]) -> Totals {
    entries.iter().fold(Totals::default(), Totals::add)
}

pub fn sum_earnings(entries: &[CalculatedEntry]) -> f64 {
    entries.iter().map(|e| e.earnings).sum()
}

/// Earnings for every entry in `year`, all companies.
pub fn annual_total(entries: &[CalculatedEntry], year: i32) -> f64 {
    entries
        .iter()
        .filter(|e| e.entry.date.year() == year)
        .map(|e| e.earnings)
        .sum()
}

/// Earnings for `month`, all companies.
pub fn month_total_all_companies(entries: &[CalculatedEntry], month: YearMonth) -> f64 {
    entries
        .iter()
        .filter(|e| month.contains(e.entry.date))
        .map(|e| e.earnings)
        .sum()
}
