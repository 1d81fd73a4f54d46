use super::work_entry::WorkEntry;

/// A work entry joined to its company, with derived hours and earnings.
/// Recomputed on every read, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatedEntry {
    pub entry: WorkEntry,
    pub company_name: String,
    /// Rate snapshot taken at calculation time.
    pub hourly_rate: f64,
    pub net_hours: f64,
    pub earnings: f64,
}

impl CalculatedEntry {
    pub fn company_id(&self) -> &str {
        &self.entry.company_id
    }
}
