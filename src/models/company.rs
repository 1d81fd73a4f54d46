use serde::{Deserialize, Serialize};

/// A client billed at a fixed hourly rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub hourly_rate: f64,
}

/// Company data as submitted by the user, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCompany {
    pub name: String,
    pub hourly_rate: f64,
}

impl Company {
    /// Case-insensitive name match, used to resolve `--company <NAME>`.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}
