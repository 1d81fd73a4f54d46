use crate::core::report::MonthlyReport;
use crate::errors::AppResult;
use crate::export::model::{csv_headers, entry_to_csv_row};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the report rows as CSV. Every field is quoted; embedded quotes are doubled.
pub fn write_report_csv<W: Write>(out: W, report: &MonthlyReport) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(out);

    wtr.write_record(csv_headers())?;

    for e in &report.entries {
        wtr.write_record(entry_to_csv_row(e))?;
    }

    wtr.flush()?;
    Ok(())
}

pub(crate) fn export_csv(report: &MonthlyReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_report_csv(file, report)?;

    notify_export_success("CSV", path);
    Ok(())
}
