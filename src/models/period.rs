//! Calendar month used by the report filter.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate};
use std::fmt;

/// A calendar month, stored as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(YearMonth)
    }

    /// Month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        // day 1 of an existing date's month always exists
        YearMonth(date.with_day(1).unwrap_or(date))
    }

    pub fn current() -> Self {
        Self::of(crate::utils::date::today())
    }

    /// Parse `YYYY-MM` (month may be a single digit).
    pub fn parse(s: &str) -> AppResult<Self> {
        let raw = s.trim();
        let (y, m) = raw
            .split_once('-')
            .ok_or_else(|| AppError::InvalidMonth(raw.to_string()))?;

        let digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
        if y.len() != 4 || m.is_empty() || m.len() > 2 || !digits(y) || !digits(m) {
            return Err(AppError::InvalidMonth(raw.to_string()));
        }

        let year: i32 = y
            .parse()
            .map_err(|_| AppError::InvalidMonth(raw.to_string()))?;
        let month: u32 = m
            .parse()
            .map_err(|_| AppError::InvalidMonth(raw.to_string()))?;

        Self::new(year, month).ok_or_else(|| AppError::InvalidMonth(raw.to_string()))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// First day of the following month, `None` past the end of the calendar.
    fn next_first_day(&self) -> Option<NaiveDate> {
        self.0.checked_add_months(Months::new(1))
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next_first_day()
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Calendar range test: `first_day <= date <= last_day`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
