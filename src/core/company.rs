use crate::core::state::TimesheetState;
use crate::core::validate::parse_rate;
use crate::db::pool::DbPool;
use crate::db::store::{commit, load_state};
use crate::errors::{AppError, AppResult};
use crate::models::company_filter::resolve_company;
use crate::models::{Company, NewCompany};

/// High-level business logic for the `company` subcommands.
pub struct CompanyLogic;

impl CompanyLogic {
    pub fn add(pool: &mut DbPool, name: Option<&str>, rate: Option<&str>) -> AppResult<Company> {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::MissingField("name".into()))?;
        let rate = rate
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or_else(|| AppError::MissingField("rate".into()))?;

        let input = NewCompany {
            name: name.to_string(),
            hourly_rate: parse_rate(rate)?,
        };

        let state = load_state(pool)?;
        let (next, company) = state.with_company_added(input)?;

        commit(
            pool,
            &next,
            "company_add",
            &company.id,
            &format!("{} @ {:.2}/h", company.name, company.hourly_rate),
        )?;

        Ok(company)
    }

    pub fn edit(
        pool: &mut DbPool,
        key: &str,
        name: Option<&str>,
        rate: Option<&str>,
    ) -> AppResult<Company> {
        let state = load_state(pool)?;
        let mut company = resolve_company(key, &state.companies)?.clone();

        if let Some(n) = name {
            company.name = n.trim().to_string();
        }
        if let Some(r) = rate {
            company.hourly_rate = parse_rate(r)?;
        }

        let next = state.with_company_updated(company.clone())?;

        commit(
            pool,
            &next,
            "company_edit",
            &company.id,
            &format!("{} @ {:.2}/h", company.name, company.hourly_rate),
        )?;

        Ok(company)
    }

    /// Delete a company and, in cascade, all of its work entries.
    /// Returns the deleted company and the number of entries removed.
    pub fn delete(pool: &mut DbPool, key: &str) -> AppResult<(Company, usize)> {
        let state = load_state(pool)?;
        let company = resolve_company(key, &state.companies)?.clone();

        let (next, removed) = state.with_company_deleted(&company.id)?;

        commit(
            pool,
            &next,
            "company_del",
            &company.id,
            &format!("{} ({} entries removed)", company.name, removed),
        )?;

        Ok((company, removed))
    }

    /// Look up a company by id or name without mutating anything.
    pub fn find(state: &TimesheetState, key: &str) -> AppResult<Company> {
        resolve_company(key, &state.companies).cloned()
    }
}
