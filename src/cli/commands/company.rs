use crate::cli::parser::{Commands, CompanyCommands};
use crate::config::Config;
use crate::core::company::CompanyLogic;
use crate::db::pool::DbPool;
use crate::db::store::load_state;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::fmt_money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Company { action } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;

        match action {
            CompanyCommands::Add { name, rate } => {
                let c = CompanyLogic::add(&mut pool, name.as_deref(), rate.as_deref())?;
                success(format!(
                    "Company '{}' added ({}/h) → id {}",
                    c.name,
                    fmt_money(c.hourly_rate, &cfg.currency_symbol),
                    c.id
                ));
            }

            CompanyCommands::Edit {
                company,
                name,
                rate,
            } => {
                let c = CompanyLogic::edit(&mut pool, company, name.as_deref(), rate.as_deref())?;
                success(format!(
                    "Company '{}' updated ({}/h).",
                    c.name,
                    fmt_money(c.hourly_rate, &cfg.currency_symbol)
                ));
            }

            CompanyCommands::Del { company, yes } => {
                let state = load_state(&pool)?;
                let target = CompanyLogic::find(&state, company)?;
                let linked = state
                    .work_entries
                    .iter()
                    .filter(|e| e.company_id == target.id)
                    .count();

                let prompt = format!(
                    "Delete company '{}'? Its {} work entries will be deleted too. This action is irreversible.",
                    target.name, linked
                );

                if !*yes && !ask_confirmation(&prompt) {
                    info("Operation cancelled.");
                    return Ok(());
                }

                let (c, removed) = CompanyLogic::delete(&mut pool, &target.id)?;
                success(format!(
                    "Company '{}' deleted ({} work entries removed).",
                    c.name, removed
                ));
            }

            CompanyCommands::List => {
                let state = load_state(&pool)?;

                if state.companies.is_empty() {
                    info("No companies registered. Use `rtimesheet company add --name <NAME> --rate <RATE>`.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::left("ID", 36),
                    Column::left("NAME", 24),
                    Column::right("RATE/H", 12),
                    Column::right("ENTRIES", 7),
                ]);

                for c in &state.companies {
                    let n = state
                        .work_entries
                        .iter()
                        .filter(|e| e.company_id == c.id)
                        .count();
                    table.add_row(vec![
                        c.id.clone(),
                        c.name.clone(),
                        fmt_money(c.hourly_rate, &cfg.currency_symbol),
                        n.to_string(),
                    ]);
                }

                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
