use crate::models::YearMonth;
use crate::utils::date::month_label;
use chrono::NaiveDate;

/// Product name used in generated file names.
pub const PRODUCT: &str = "rtimesheet";

/// `rtimesheet_backup_2024-03-31.json`
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("{PRODUCT}_backup_{}.json", date.format("%Y-%m-%d"))
}

/// `report_rtimesheet_marzo_2024.<ext>`
pub fn report_file_name(month: YearMonth, ext: &str) -> String {
    let label = month_label(month.year(), month.month()).replace(char::is_whitespace, "_");
    format!("report_{PRODUCT}_{label}.{ext}")
}
