// src/export/pdf_export.rs

use crate::core::report::MonthlyReport;
use crate::errors::{AppError, AppResult};
use crate::export::model::{entry_to_pdf_row, pdf_headers};
use crate::export::notify_export_success;
use crate::export::pdf::{PdfManager, PdfSection};
use crate::ui::messages::info;
use crate::utils::date::month_label;
use crate::utils::{fmt_hours, fmt_money};
use std::path::Path;

/// Title of the printable report: `Riepilogo marzo 2024`.
pub(crate) fn report_title(report: &MonthlyReport) -> String {
    format!(
        "Riepilogo {}",
        month_label(report.month.year(), report.month.month())
    )
}

/// Closing block: hour totals, monthly earnings, annual total.
pub(crate) fn summary_lines(report: &MonthlyReport, currency: &str) -> Vec<String> {
    let t = &report.totals;
    vec![
        format!("Ore normali: {}", fmt_hours(t.regular_hours)),
        format!("Ore straordinario: {}", fmt_hours(t.overtime_hours)),
        format!("Ore pausa: {}", fmt_hours(t.break_hours)),
        format!("Ore nette: {}", fmt_hours(t.total_hours)),
        format!("Totale mese: {}", fmt_money(t.earnings, currency)),
        format!(
            "Totale annuo {}: {}",
            report.month.year(),
            fmt_money(report.annual_total, currency)
        ),
    ]
}

/// Export PDF: one section per company group, then the totals.
pub(crate) fn export_pdf(report: &MonthlyReport, path: &Path, currency: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let sections: Vec<PdfSection> = report
        .groups
        .iter()
        .map(|g| PdfSection {
            heading: g.company_name.clone(),
            rows: g.entries.iter().map(entry_to_pdf_row).collect(),
            footer: format!("Totale {}: {}", g.company_name, fmt_money(g.subtotal, currency)),
        })
        .collect();

    let mut pdf = PdfManager::new();
    pdf.write_report(
        &report_title(report),
        &pdf_headers(),
        &sections,
        &summary_lines(report, currency),
    );

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
