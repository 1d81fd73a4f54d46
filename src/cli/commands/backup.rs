use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::store::load_state;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        let state = load_state(&pool)?;

        let path = BackupLogic::backup(&state, cfg, file.as_deref(), *compress, *force)?;

        ttlog_quiet(
            &pool.conn,
            "backup",
            &path.display().to_string(),
            &format!(
                "{} companies, {} work entries",
                state.companies.len(),
                state.work_entries.len()
            ),
        );
    }

    Ok(())
}
