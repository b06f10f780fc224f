mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "dodona")]
#[command(
    about = "Explore the Thessalian-dialect inscriptions of the Dodona oracle corpus",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Log level (overrides the config file)")]
    pub log_level: Option<LogLevel>,

    #[arg(long, global = true, help = "Path to the config file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
