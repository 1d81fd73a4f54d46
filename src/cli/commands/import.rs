use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::ImportLogic;
use crate::db::pool::DbPool;
use crate::db::store::load_state;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::path::expand_tilde;

/// Replace every company and entry with the content of a backup file.
/// The file is fully validated before anything is touched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, yes } = cmd {
        let path = expand_tilde(file);
        let imported = ImportLogic::read(&path)?;

        let mut pool = DbPool::open(&cfg.database)?;
        let current = load_state(&pool)?;

        let prompt = format!(
            "Replace {} companies and {} work entries with {} companies and {} work entries from {}?",
            current.companies.len(),
            current.work_entries.len(),
            imported.companies.len(),
            imported.work_entries.len(),
            path.display()
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        ImportLogic::apply(&mut pool, &imported, &path)?;
        success(format!(
            "Import completed: {} companies, {} work entries.",
            imported.companies.len(),
            imported.work_entries.len()
        ));
    }

    Ok(())
}
