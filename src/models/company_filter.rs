use crate::errors::{AppError, AppResult};
use crate::models::company::Company;

/// Company selection for reports: every company, or a single one by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyFilter {
    All,
    Only(String),
}

impl CompanyFilter {
    pub fn matches(&self, company_id: &str) -> bool {
        match self {
            CompanyFilter::All => true,
            CompanyFilter::Only(id) => id == company_id,
        }
    }

    /// Convert CLI input → filter.
    /// Accepts `all` (any case), a company id, or an exact company name.
    pub fn from_arg(arg: Option<&str>, companies: &[Company]) -> AppResult<Self> {
        match arg.map(str::trim) {
            None => Ok(CompanyFilter::All),
            Some(a) if a.eq_ignore_ascii_case("all") => Ok(CompanyFilter::All),
            Some(a) => resolve_company(a, companies).map(|c| CompanyFilter::Only(c.id.clone())),
        }
    }
}

/// Find a company by id first, then by case-insensitive name.
pub fn resolve_company<'a>(key: &str, companies: &'a [Company]) -> AppResult<&'a Company> {
    companies
        .iter()
        .find(|c| c.id == key)
        .or_else(|| companies.iter().find(|c| c.matches_name(key)))
        .ok_or_else(|| AppError::CompanyNotFound(key.to_string()))
}
