use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::{CompanyGroup, aggregate};
use crate::core::photo::photo_mime;
use crate::core::report::{MonthlyReport, available_months};
use crate::db::pool::DbPool;
use crate::db::store::load_state;
use crate::errors::AppResult;
use crate::models::{CompanyFilter, YearMonth};
use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, YELLOW, color_for_amount, colorize_optional, paint};
use crate::utils::date::{format_date_it, month_label};
use crate::utils::formatting::{bold, separator, truncate};
use crate::utils::table::{Column, Table};
use crate::utils::{fmt_hours, fmt_money};

const RULE_WIDTH: usize = 110;

fn entries_table(group: &CompanyGroup, currency: &str) -> Table {
    let mut table = Table::new(vec![
        Column::left("ID", 36),
        Column::left("DATE", 10),
        Column::right("REG", 6),
        Column::right("OT", 6),
        Column::right("BREAK", 6),
        Column::right("NET", 6),
        Column::right("EARNINGS", 12),
        Column::left("MACHINE", 10),
        Column::left("NOTES", 24),
    ]);

    for e in &group.entries {
        let notes = match e.entry.photo.as_deref().and_then(photo_mime) {
            Some(mime) => format!("📷 {} {}", mime, e.entry.notes),
            None => e.entry.notes.clone(),
        };

        table.add_row(vec![
            e.entry.id.clone(),
            format_date_it(e.entry.date),
            fmt_hours(e.entry.regular_hours),
            fmt_hours(e.entry.overtime_hours),
            fmt_hours(e.entry.break_hours),
            fmt_hours(e.net_hours),
            paint(
                color_for_amount(e.earnings),
                &fmt_money(e.earnings, currency),
            ),
            colorize_optional(&e.entry.machine_code),
            colorize_optional(&truncate(notes.trim(), 24)),
        ]);
    }

    table
}

fn print_report(report: &MonthlyReport, cfg: &Config) {
    let currency = cfg.currency_symbol.as_str();
    let rule = separator(&cfg.separator_char, RULE_WIDTH);

    header(format!(
        "Riepilogo {}",
        month_label(report.month.year(), report.month.month())
    ));

    if report.is_empty() {
        info(format!("No work entries for {}.", report.month));
    }

    for group in &report.groups {
        let rate = report
            .entries
            .iter()
            .find(|e| e.company_id() == group.company_id)
            .map(|e| e.hourly_rate)
            .unwrap_or_default();

        println!(
            "{} {}",
            bold(&group.company_name),
            paint(CYAN, &format!("({}/h)", fmt_money(rate, currency)))
        );
        print!("{}", entries_table(group, currency).render());

        let sub = aggregate(&group.entries);
        println!(
            "{} reg {} | ot {} | break {} | net {} | {}",
            paint(YELLOW, "Subtotal:"),
            fmt_hours(sub.regular_hours),
            fmt_hours(sub.overtime_hours),
            fmt_hours(sub.break_hours),
            fmt_hours(sub.total_hours),
            bold(&fmt_money(group.subtotal, currency))
        );
        println!("{rule}");
    }

    let t = &report.totals;
    println!("{}", bold("Totals"));
    println!("  Regular hours : {}", fmt_hours(t.regular_hours));
    println!("  Overtime hours: {}", fmt_hours(t.overtime_hours));
    println!("  Break hours   : {}", fmt_hours(t.break_hours));
    println!("  Net hours     : {}", fmt_hours(t.total_hours));
    println!(
        "  Earnings      : {}",
        paint(color_for_amount(t.earnings), &fmt_money(t.earnings, currency))
    );
    println!("{rule}");
    println!(
        "  Month total (all companies): {}",
        fmt_money(report.month_total_all_companies, currency)
    );
    println!(
        "  Annual total {}           : {}",
        report.month.year(),
        fmt_money(report.annual_total, currency)
    );
}

/// Monthly report, or the list of months with data (`--months`).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        month,
        company,
        months,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        let state = load_state(&pool)?;

        if *months {
            let list = available_months(&state);
            if list.is_empty() {
                info("No work entries logged yet.");
            }
            for m in list {
                println!("{}  {}", m, month_label(m.year(), m.month()));
            }
            return Ok(());
        }

        let month = match month.as_deref() {
            Some(m) => YearMonth::parse(m)?,
            None => YearMonth::current(),
        };
        let filter = CompanyFilter::from_arg(company.as_deref(), &state.companies)?;

        let report = MonthlyReport::build(&state, month, filter);
        print_report(&report, cfg);
    }

    Ok(())
}
