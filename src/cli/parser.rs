use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI application to log work per company and compute earnings
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple timesheet CLI: log daily hours per company, compute earnings, export monthly reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Entry fields shared by `add` and `edit`.
#[derive(Args, Debug, Clone, Default)]
pub struct EntryArgs {
    /// Company id or name
    #[arg(long = "company", short = 'c')]
    pub company: Option<String>,

    /// Work date (YYYY-MM-DD), default today
    #[arg(long = "date", short = 'd')]
    pub date: Option<String>,

    #[arg(long = "regular", help = "Regular hours (e.g. 8 or 7,5)")]
    pub regular: Option<String>,

    #[arg(long = "overtime", help = "Overtime hours, paid at 1.5x")]
    pub overtime: Option<String>,

    #[arg(long = "break", help = "Break hours, deducted from regular hours")]
    pub break_hours: Option<String>,

    #[arg(long = "machine", help = "Machine code")]
    pub machine: Option<String>,

    #[arg(long = "notes", help = "Free-text notes")]
    pub notes: Option<String>,

    #[arg(
        long = "dictated",
        value_name = "TEXT",
        help = "Dictated transcript appended to the notes ('-' reads stdin)"
    )]
    pub dictated: Option<String>,

    #[arg(long = "photo", value_name = "FILE", help = "Attach a photo")]
    pub photo: Option<String>,
}

#[derive(Subcommand)]
pub enum CompanyCommands {
    /// Register a new company
    Add {
        #[arg(long)]
        name: Option<String>,

        #[arg(long, help = "Hourly rate (e.g. 20 or 22,50)")]
        rate: Option<String>,
    },

    /// Change name and/or hourly rate
    Edit {
        /// Company id or name
        company: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        rate: Option<String>,
    },

    /// Delete a company and all of its work entries
    Del {
        /// Company id or name
        company: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List registered companies
    List,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage companies
    Company {
        #[command(subcommand)]
        action: CompanyCommands,
    },

    /// Log a work entry
    Add {
        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Edit an existing work entry
    Edit {
        /// Entry id
        id: String,

        #[command(flatten)]
        entry: EntryArgs,

        #[arg(long = "clear-photo", conflicts_with = "photo")]
        clear_photo: bool,
    },

    /// Delete a work entry by id
    Del {
        /// Entry id
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Monthly report with totals
    Report {
        #[arg(long, short, help = "Month (YYYY-MM), default current month")]
        month: Option<String>,

        #[arg(long, short, help = "Company id, name or 'all'")]
        company: Option<String>,

        #[arg(long = "months", help = "List months with logged entries")]
        months: bool,
    },

    /// Export the monthly report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short, help = "Month (YYYY-MM), default current month")]
        month: Option<String>,

        #[arg(long, short, help = "Company id, name or 'all'")]
        company: Option<String>,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Save all companies and entries to a JSON backup
    Backup {
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Replace all data with the content of a JSON backup
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
