// NOTE: Command Organization Rationale
//
// Why one subcommand per component?
// - Each component has its own inputs (amount vs current/required)
// - Shared display flags live in DisplayArgs and are flattened into each
// - Configuration management is namespaced under `config`

mod commands;
mod common;

pub use commands::*;
pub use common::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Render game currency and experience values", long_about = None)]
#[command(version)]
#[command(term_width = 0)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Config file (defaults to $TALLY_CONFIG or the user config dir)")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
