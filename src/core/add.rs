use crate::core::dictation::{Transcript, append_transcript};
use crate::core::photo::load_photo;
use crate::core::validate::parse_hours;
use crate::db::pool::DbPool;
use crate::db::store::{commit, load_state};
use crate::errors::{AppError, AppResult};
use crate::models::company_filter::resolve_company;
use crate::models::{NewWorkEntry, WorkEntry};
use crate::utils::date;
use std::path::PathBuf;

/// Raw entry fields as typed on the command line.
#[derive(Debug, Clone, Default)]
pub struct EntryInput {
    pub company: Option<String>,
    pub date: Option<String>,
    pub regular: Option<String>,
    pub overtime: Option<String>,
    pub break_hours: Option<String>,
    pub machine: Option<String>,
    pub notes: Option<String>,
    pub dictated: Option<Transcript>,
    pub photo: Option<PathBuf>,
    pub clear_photo: bool,
}

fn parse_entry_date(raw: &str) -> AppResult<chrono::NaiveDate> {
    date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(pool: &mut DbPool, input: EntryInput) -> AppResult<WorkEntry> {
        let state = load_state(pool)?;

        let company_key = input
            .company
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::MissingField("company".into()))?;
        let company = resolve_company(company_key, &state.companies)?;

        let entry_date = match input.date.as_deref() {
            Some(d) => parse_entry_date(d)?,
            None => date::today(),
        };

        let mut notes = input.notes.unwrap_or_default();
        if let Some(t) = &input.dictated {
            notes = append_transcript(&notes, t);
        }

        let photo = match &input.photo {
            Some(p) => Some(load_photo(p)?),
            None => None,
        };

        let new_entry = NewWorkEntry {
            company_id: company.id.clone(),
            date: Some(entry_date),
            regular_hours: parse_hours("regular", input.regular.as_deref())?,
            overtime_hours: parse_hours("overtime", input.overtime.as_deref())?,
            break_hours: parse_hours("break", input.break_hours.as_deref())?,
            machine_code: input.machine.unwrap_or_default(),
            notes,
            photo,
        };

        let company_name = company.name.clone();
        let (next, entry) = state.with_entry_added(new_entry)?;

        commit(
            pool,
            &next,
            "add",
            &entry.id,
            &format!(
                "{} {} reg={} ot={} break={}",
                entry.date_str(),
                company_name,
                entry.regular_hours,
                entry.overtime_hours,
                entry.break_hours
            ),
        )?;

        Ok(entry)
    }
}

/// High-level business logic for the `edit` command: only the given fields change.
pub struct EditLogic;

impl EditLogic {
    pub fn apply(pool: &mut DbPool, id: &str, input: EntryInput) -> AppResult<WorkEntry> {
        let state = load_state(pool)?;
        let mut entry = state
            .entry(id)
            .cloned()
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;

        if let Some(key) = input.company.as_deref() {
            entry.company_id = resolve_company(key.trim(), &state.companies)?.id.clone();
        }
        if let Some(d) = input.date.as_deref() {
            entry.date = parse_entry_date(d)?;
        }
        if let Some(h) = parse_hours("regular", input.regular.as_deref())? {
            entry.regular_hours = h;
        }
        if let Some(h) = parse_hours("overtime", input.overtime.as_deref())? {
            entry.overtime_hours = h;
        }
        if let Some(h) = parse_hours("break", input.break_hours.as_deref())? {
            entry.break_hours = h;
        }
        if let Some(m) = input.machine {
            entry.machine_code = m;
        }
        if let Some(n) = input.notes {
            entry.notes = n;
        }
        if let Some(t) = &input.dictated {
            entry.notes = append_transcript(&entry.notes, t);
        }
        if input.clear_photo {
            entry.photo = None;
        }
        if let Some(p) = &input.photo {
            entry.photo = Some(load_photo(p)?);
        }

        let next = state.with_entry_updated(entry.clone())?;

        commit(
            pool,
            &next,
            "edit",
            &entry.id,
            &format!(
                "{} reg={} ot={} break={}",
                entry.date_str(),
                entry.regular_hours,
                entry.overtime_hours,
                entry.break_hours
            ),
        )?;

        Ok(entry)
    }
}
