use crate::cli::parser::{Commands, EntryArgs};
use crate::config::Config;
use crate::core::add::{AddLogic, EntryInput};
use crate::core::dictation::Transcript;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::WorkEntry;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use crate::utils::{fmt_hours, formatting};
use std::io::{self, Read};

/// `--dictated -` reads the transcript from stdin.
fn read_transcript(raw: &str) -> AppResult<Transcript> {
    if raw == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(Transcript::new(buf));
    }
    Ok(Transcript::new(raw))
}

pub(crate) fn entry_input(args: &EntryArgs) -> AppResult<EntryInput> {
    let dictated = match args.dictated.as_deref() {
        Some(raw) => Some(read_transcript(raw)?),
        None => None,
    };

    Ok(EntryInput {
        company: args.company.clone(),
        date: args.date.clone(),
        regular: args.regular.clone(),
        overtime: args.overtime.clone(),
        break_hours: args.break_hours.clone(),
        machine: args.machine.clone(),
        notes: args.notes.clone(),
        dictated,
        photo: args.photo.as_deref().map(expand_tilde),
        clear_photo: false,
    })
}

pub(crate) fn print_entry(entry: &WorkEntry) {
    println!(
        "   {} | reg {} | ot {} | break {}{}",
        entry.date_str(),
        fmt_hours(entry.regular_hours),
        fmt_hours(entry.overtime_hours),
        fmt_hours(entry.break_hours),
        if entry.has_photo() { " | 📷" } else { "" }
    );
    if !entry.machine_code.is_empty() {
        println!("   machine: {}", entry.machine_code);
    }
    if !entry.notes.is_empty() {
        println!("   notes  : {}", formatting::truncate(&entry.notes, 60));
    }
}

/// Log a new work entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { entry } = cmd {
        let input = entry_input(entry)?;

        let mut pool = DbPool::open(&cfg.database)?;
        let saved = AddLogic::apply(&mut pool, input)?;

        success(format!("Work entry saved → id {}", saved.id));
        print_entry(&saved);
    }

    Ok(())
}
