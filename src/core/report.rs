//! Monthly report: the single object every presentation consumes.

use crate::core::calculator::{
    self, CompanyGroup, Totals, aggregate, annual_total, group_by_company,
    month_total_all_companies,
};
use crate::core::state::TimesheetState;
use crate::models::{CalculatedEntry, CompanyFilter, YearMonth};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub month: YearMonth,
    pub filter: CompanyFilter,
    pub entries: Vec<CalculatedEntry>,
    pub totals: Totals,
    pub groups: Vec<CompanyGroup>,
    /// Earnings for the month across all companies, regardless of `filter`.
    pub month_total_all_companies: f64,
    /// Earnings for the month's year across all companies, regardless of `filter`.
    pub annual_total: f64,
}

impl MonthlyReport {
    pub fn build(state: &TimesheetState, month: YearMonth, filter: CompanyFilter) -> Self {
        let calculated = state.calculated();
        let entries = calculator::filter_entries(&calculated, month, &filter);

        Self {
            month,
            totals: aggregate(&entries),
            groups: group_by_company(&entries),
            month_total_all_companies: month_total_all_companies(&calculated, month),
            annual_total: annual_total(&calculated, month.year()),
            filter,
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Months present in the raw entries, newest first.
pub fn available_months(state: &TimesheetState) -> Vec<YearMonth> {
    let months: BTreeSet<YearMonth> = state
        .work_entries
        .iter()
        .map(|e| YearMonth::of(e.date))
        .collect();

    months.into_iter().rev().collect()
}
