use crate::config::Config;
use crate::core::state::TimesheetState;
use crate::core::validate::{validate_company_update, validate_entry_hours};
use crate::db::pool::DbPool;
use crate::db::store::commit;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::export::filename::backup_file_name;
use crate::models::{Company, WorkEntry};
use crate::ui::messages::{success, warning};
use crate::utils::date::today;
use crate::utils::path::resolve_output;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Pretty JSON document `{"companies": [...], "workEntries": [...]}`.
    pub fn to_json(state: &TimesheetState) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(state)?)
    }

    /// Write the full backup. Returns the final path (the `.zip` when compressed).
    pub fn backup(
        state: &TimesheetState,
        cfg: &Config,
        file: Option<&str>,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let dest = resolve_output(file, &cfg.export_dir, &backup_file_name(today()));

        ensure_writable(&dest, force)?;

        let json = Self::to_json(state)?;
        fs::write(&dest, json)?;
        success(format!("Backup created: {}", dest.display()));

        if !compress {
            return Ok(dest);
        }

        let compressed = compress_backup(&dest)?;
        if let Err(e) = fs::remove_file(&dest) {
            warning(format!("Failed to remove uncompressed backup: {}", e));
        }

        Ok(compressed)
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "backup.json".to_string());

    zip.start_file(name, options)
        .map_err(|e| AppError::Export(format!("zip error: {e}")))?;
    zip.write_all(&fs::read(path)?)?;
    zip.finish()
        .map_err(|e| AppError::Export(format!("zip error: {e}")))?;

    success(format!("📦 Compressed: {}", zip_path.display()));

    Ok(zip_path)
}

pub struct ImportLogic;

impl ImportLogic {
    /// Validate a backup document. Both `companies` and `workEntries`
    /// must be present and arrays, and every element must be well formed:
    /// non-empty names, finite non-negative rates and hours.
    /// Entries pointing at a missing company are kept (orphans).
    pub fn parse(text: &str) -> AppResult<TimesheetState> {
        let doc: Value = serde_json::from_str(text)
            .map_err(|e| AppError::InvalidBackup(format!("not valid JSON: {e}")))?;

        let obj = doc
            .as_object()
            .ok_or_else(|| AppError::InvalidBackup("top level is not an object".into()))?;

        let companies = array_field(obj, "companies")?;
        let entries = array_field(obj, "workEntries")?;

        let companies: Vec<Company> = serde_json::from_value(Value::Array(companies.clone()))
            .map_err(|e| AppError::InvalidBackup(format!("invalid company: {e}")))?;
        let entries: Vec<WorkEntry> = serde_json::from_value(Value::Array(entries.clone()))
            .map_err(|e| AppError::InvalidBackup(format!("invalid work entry: {e}")))?;

        for c in &companies {
            validate_company_update(c)
                .map_err(|e| AppError::InvalidBackup(format!("company '{}': {e}", c.id)))?;
        }
        for e in &entries {
            validate_entry_hours(e)
                .map_err(|err| AppError::InvalidBackup(format!("work entry '{}': {err}", e.id)))?;
        }

        Ok(TimesheetState::replaced(companies, entries))
    }

    /// Replace both collections wholesale with an already validated backup.
    pub fn apply(pool: &mut DbPool, imported: &TimesheetState, source: &Path) -> AppResult<()> {
        commit(
            pool,
            imported,
            "import",
            &source.display().to_string(),
            &format!(
                "Imported {} companies, {} work entries",
                imported.companies.len(),
                imported.work_entries.len()
            ),
        )
    }

    pub fn read(path: &Path) -> AppResult<TimesheetState> {
        let text = fs::read_to_string(path)
            .map_err(|e| AppError::InvalidBackup(format!("cannot read {}: {e}", path.display())))?;
        Self::parse(&text)
    }
}

fn array_field<'a>(
    obj: &'a serde_json::Map<String, Value>,
    key: &str,
) -> AppResult<&'a Vec<Value>> {
    match obj.get(key) {
        None => Err(AppError::InvalidBackup(format!("missing '{key}' field"))),
        Some(v) => v
            .as_array()
            .ok_or_else(|| AppError::InvalidBackup(format!("'{key}' is not an array"))),
    }
}
