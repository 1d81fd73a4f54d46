use crate::cli::commands::add::{entry_input, print_entry};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::EditLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Change the given fields of an existing entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        entry,
        clear_photo,
    } = cmd
    {
        let mut input = entry_input(entry)?;
        input.clear_photo = *clear_photo;

        let mut pool = DbPool::open(&cfg.database)?;
        let updated = EditLogic::apply(&mut pool, id, input)?;

        success(format!("Work entry {} updated.", updated.id));
        print_entry(&updated);
    }

    Ok(())
}
