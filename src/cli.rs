//! Command-line surface: clap parser and one handler per subcommand.

pub mod commands;
pub mod parser;
