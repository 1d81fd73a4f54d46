//! In-memory timesheet state.
//!
//! The two collections are only ever replaced wholesale: every mutation
//! borrows the current state and returns a new one, so a failed mutation
//! leaves the caller's value untouched.

use crate::core::calculator;
use crate::core::validate;
use crate::errors::{AppError, AppResult};
use crate::models::{CalculatedEntry, Company, NewCompany, NewWorkEntry, WorkEntry};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Companies and work entries. Serializes as the backup document
/// `{"companies": [...], "workEntries": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetState {
    pub companies: Vec<Company>,
    pub work_entries: Vec<WorkEntry>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl TimesheetState {
    pub fn new(companies: Vec<Company>, work_entries: Vec<WorkEntry>) -> Self {
        Self {
            companies,
            work_entries,
        }
    }

    pub fn company(&self, id: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    pub fn entry(&self, id: &str) -> Option<&WorkEntry> {
        self.work_entries.iter().find(|e| e.id == id)
    }

    /// Enriched entries sorted by date; orphans excluded.
    pub fn calculated(&self) -> Vec<CalculatedEntry> {
        calculator::calculate_all(&self.companies, &self.work_entries)
    }

    // ---------------------------
    // Companies
    // ---------------------------

    pub fn with_company_added(&self, input: NewCompany) -> AppResult<(Self, Company)> {
        validate::validate_company(&input)?;

        let company = Company {
            id: new_id(),
            name: input.name.trim().to_string(),
            hourly_rate: input.hourly_rate,
        };

        let mut companies = self.companies.clone();
        companies.push(company.clone());

        Ok((Self::new(companies, self.work_entries.clone()), company))
    }

    pub fn with_company_updated(&self, updated: Company) -> AppResult<Self> {
        if self.company(&updated.id).is_none() {
            return Err(AppError::CompanyNotFound(updated.id));
        }
        validate::validate_company_update(&updated)?;

        let companies = self
            .companies
            .iter()
            .map(|c| {
                if c.id == updated.id {
                    updated.clone()
                } else {
                    c.clone()
                }
            })
            .collect();

        Ok(Self::new(companies, self.work_entries.clone()))
    }

    /// Remove the company and every entry referencing it.
    /// Returns the new state and the number of entries removed.
    pub fn with_company_deleted(&self, id: &str) -> AppResult<(Self, usize)> {
        if self.company(id).is_none() {
            return Err(AppError::CompanyNotFound(id.to_string()));
        }

        let companies: Vec<Company> = self
            .companies
            .iter()
            .filter(|c| c.id != id)
            .cloned()
            .collect();

        let work_entries: Vec<WorkEntry> = self
            .work_entries
            .iter()
            .filter(|e| e.company_id != id)
            .cloned()
            .collect();

        let removed = self.work_entries.len() - work_entries.len();
        Ok((Self::new(companies, work_entries), removed))
    }

    // ---------------------------
    // Work entries
    // ---------------------------

    pub fn with_entry_added(&self, input: NewWorkEntry) -> AppResult<(Self, WorkEntry)> {
        let date = validate::validate_new_entry(&input, &self.companies)?;

        let entry = WorkEntry {
            id: new_id(),
            company_id: input.company_id,
            date,
            regular_hours: input.regular_hours.unwrap_or(0.0),
            overtime_hours: input.overtime_hours.unwrap_or(0.0),
            break_hours: input.break_hours.unwrap_or(0.0),
            machine_code: input.machine_code,
            notes: input.notes,
            photo: input.photo,
        };

        let mut work_entries = self.work_entries.clone();
        work_entries.push(entry.clone());

        Ok((Self::new(self.companies.clone(), work_entries), entry))
    }

    pub fn with_entry_updated(&self, updated: WorkEntry) -> AppResult<Self> {
        if self.entry(&updated.id).is_none() {
            return Err(AppError::EntryNotFound(updated.id));
        }
        validate::validate_entry_update(&updated, &self.companies)?;

        let work_entries = self
            .work_entries
            .iter()
            .map(|e| {
                if e.id == updated.id {
                    updated.clone()
                } else {
                    e.clone()
                }
            })
            .collect();

        Ok(Self::new(self.companies.clone(), work_entries))
    }

    pub fn with_entry_deleted(&self, id: &str) -> AppResult<Self> {
        if self.entry(id).is_none() {
            return Err(AppError::EntryNotFound(id.to_string()));
        }

        let work_entries = self
            .work_entries
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();

        Ok(Self::new(self.companies.clone(), work_entries))
    }

    /// Full overwrite, used by import.
    pub fn replaced(companies: Vec<Company>, work_entries: Vec<WorkEntry>) -> Self {
        Self::new(companies, work_entries)
    }
}
