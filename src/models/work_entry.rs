use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's logged hours against one company.
///
/// `company_id` is a weak reference: the company may have been deleted,
/// in which case the entry is skipped by every calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub id: String,
    pub company_id: String,
    pub date: NaiveDate, // ⇔ "YYYY-MM-DD"
    #[serde(default)]
    pub regular_hours: f64,
    #[serde(default)]
    pub overtime_hours: f64,
    #[serde(default)]
    pub break_hours: f64,
    #[serde(default)]
    pub machine_code: String,
    #[serde(default)]
    pub notes: String,
    /// `data:<mime>;base64,<payload>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Entry data as submitted by the user, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewWorkEntry {
    pub company_id: String,
    pub date: Option<NaiveDate>,
    pub regular_hours: Option<f64>,
    pub overtime_hours: Option<f64>,
    pub break_hours: Option<f64>,
    pub machine_code: String,
    pub notes: String,
    pub photo: Option<String>,
}

impl WorkEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn has_photo(&self) -> bool {
        self.photo.as_deref().is_some_and(|p| !p.is_empty())
    }
}
