use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::store::load_state;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::{CompanyFilter, YearMonth};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        month,
        company,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        let state = load_state(&pool)?;

        let month = match month.as_deref() {
            Some(m) => YearMonth::parse(m)?,
            None => YearMonth::current(),
        };
        let filter = CompanyFilter::from_arg(company.as_deref(), &state.companies)?;

        if let Some(path) =
            ExportLogic::export(&state, cfg, *format, month, filter, file.as_deref(), *force)?
        {
            ttlog_quiet(
                &pool.conn,
                "export",
                &path.display().to_string(),
                &format!("{} report for {}", format.as_str(), month),
            );
        }
    }
    Ok(())
}
