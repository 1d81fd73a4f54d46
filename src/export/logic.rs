// src/export/logic.rs

use crate::config::Config;
use crate::core::report::MonthlyReport;
use crate::core::state::TimesheetState;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv_report::export_csv;
use crate::export::filename::report_file_name;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::pdf_export::export_pdf;
use crate::models::{CompanyFilter, YearMonth};
use crate::ui::messages::warning;
use crate::utils::path::resolve_output;
use std::path::PathBuf;

/// Logica di alto livello per l'export del riepilogo mensile.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the monthly report.
    ///
    /// - `format`: csv | json | pdf
    /// - `file`: output path; default `report_rtimesheet_<mese>_<anno>.<ext>`
    ///   inside `cfg.export_dir`
    ///
    /// Returns `None` when the selection is empty and nothing was written.
    pub fn export(
        state: &TimesheetState,
        cfg: &Config,
        format: ExportFormat,
        month: YearMonth,
        filter: CompanyFilter,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let report = MonthlyReport::build(state, month, filter);

        if report.is_empty() {
            warning(format!("No entries to export for {month}."));
            return Ok(None);
        }

        let default_name = report_file_name(month, format.as_str());
        let path = resolve_output(file, &cfg.export_dir, &default_name);

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&report, &path)?,
            ExportFormat::Json => export_json(&report, &path)?,
            ExportFormat::Pdf => export_pdf(&report, &path, &cfg.currency_symbol)?,
        }

        Ok(Some(path))
    }
}
