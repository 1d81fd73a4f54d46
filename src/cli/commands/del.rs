use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::db::store::load_state;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;

        let state = load_state(&pool)?;
        let entry = state
            .entry(id)
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;
        let company = state
            .company(&entry.company_id)
            .map(|c| c.name.as_str())
            .unwrap_or("?");

        let prompt = format!(
            "Delete the entry of {} for '{}'? This action is irreversible.",
            entry.date_str(),
            company
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = DeleteLogic::apply(&mut pool, id)?;
        success(format!(
            "Entry {} of {} has been deleted.",
            removed.id,
            removed.date_str()
        ));
    }

    Ok(())
}
