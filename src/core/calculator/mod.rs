//! Earnings pipeline: enrichment, filtering, aggregation, grouping.
//! Every function here is pure over in-memory slices.

pub mod earnings;
pub mod filter;
pub mod grouping;
pub mod totals;

pub use earnings::{OVERTIME_MULTIPLIER, calculate_all, calculate_entry};
pub use filter::{filter_by_month, filter_entries};
pub use grouping::{CompanyGroup, group_by_company};
pub use totals::{Totals, aggregate, annual_total, month_total_all_companies, sum_earnings};
