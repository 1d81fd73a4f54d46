//! Input validation for company and work-entry submissions.
//! Nothing here touches the state: a rejected submission mutates nothing.

use crate::errors::{AppError, AppResult};
use crate::models::{Company, NewCompany, NewWorkEntry, WorkEntry};
use chrono::NaiveDate;

/// Parse a decimal typed by the user. Accepts `7.5` and `7,5`.
fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse::<f64>().ok()
}

/// Parse an optional hours field. Blank input is treated as absent.
pub fn parse_hours(field: &'static str, raw: Option<&str>) -> AppResult<Option<f64>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => {
            let h = parse_decimal(v).ok_or_else(|| AppError::InvalidHours {
                field,
                value: v.to_string(),
            })?;
            check_hours(field, h)?;
            Ok(Some(h))
        }
    }
}

pub fn parse_rate(raw: &str) -> AppResult<f64> {
    let rate = parse_decimal(raw).ok_or_else(|| AppError::InvalidRate(raw.trim().to_string()))?;
    check_rate(rate)?;
    Ok(rate)
}

fn check_hours(field: &'static str, h: f64) -> AppResult<()> {
    if !h.is_finite() || h < 0.0 {
        return Err(AppError::InvalidHours {
            field,
            value: h.to_string(),
        });
    }
    Ok(())
}

fn check_rate(rate: f64) -> AppResult<()> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(AppError::InvalidRate(rate.to_string()));
    }
    Ok(())
}

fn check_company_exists(id: &str, companies: &[Company]) -> AppResult<()> {
    if companies.iter().any(|c| c.id == id) {
        Ok(())
    } else {
        Err(AppError::CompanyNotFound(id.to_string()))
    }
}

pub fn validate_company(input: &NewCompany) -> AppResult<()> {
    if input.name.trim().is_empty() {
        return Err(AppError::MissingField("name".into()));
    }
    check_rate(input.hourly_rate)
}

pub fn validate_company_update(company: &Company) -> AppResult<()> {
    if company.name.trim().is_empty() {
        return Err(AppError::MissingField("name".into()));
    }
    check_rate(company.hourly_rate)
}

/// Company, date and at least one of regular/overtime hours are required.
/// Returns the validated date.
pub fn validate_new_entry(input: &NewWorkEntry, companies: &[Company]) -> AppResult<NaiveDate> {
    if input.company_id.trim().is_empty() {
        return Err(AppError::MissingField("company".into()));
    }

    let date = input
        .date
        .ok_or_else(|| AppError::MissingField("date".into()))?;

    if input.regular_hours.is_none() && input.overtime_hours.is_none() {
        return Err(AppError::MissingField(
            "regular or overtime hours".into(),
        ));
    }

    if let Some(h) = input.regular_hours {
        check_hours("regular", h)?;
    }
    if let Some(h) = input.overtime_hours {
        check_hours("overtime", h)?;
    }
    if let Some(h) = input.break_hours {
        check_hours("break", h)?;
    }

    check_company_exists(&input.company_id, companies)?;

    Ok(date)
}

/// Hours of an already built entry: finite and non-negative.
pub fn validate_entry_hours(entry: &WorkEntry) -> AppResult<()> {
    check_hours("regular", entry.regular_hours)?;
    check_hours("overtime", entry.overtime_hours)?;
    check_hours("break", entry.break_hours)
}

pub fn validate_entry_update(entry: &WorkEntry, companies: &[Company]) -> AppResult<()> {
    validate_entry_hours(entry)?;
    check_company_exists(&entry.company_id, companies)
}
