use crate::models::{CalculatedEntry, CompanyFilter, YearMonth};

/// Entries dated inside `month`, restricted to `company`.
pub fn filter_entries(
    entries: &[CalculatedEntry],
    month: YearMonth,
    company: &CompanyFilter,
) -> Vec<CalculatedEntry> {
    entries
        .iter()
        .filter(|e| month.contains(e.entry.date) && company.matches(e.company_id()))
        .cloned()
        .collect()
}

/// Entries dated inside `month`, every company.
pub fn filter_by_month(entries: &[CalculatedEntry], month: YearMonth) -> Vec<CalculatedEntry> {
    filter_entries(entries, month, &CompanyFilter::All)
}
