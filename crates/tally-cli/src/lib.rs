// NOTE: tally Architecture Rationale
//
// Why a separate core crate?
// - Formatting must stay a pure function of (amount, mode)
// - Front ends (this CLI, a future web binding) only add I/O and styling
// - Trade-off: the CLI re-exports nothing from core; it converts at the edges
//
// Why JSON ignores view mode?
// - JSON output is an API; it always carries the full rendered record
// - --quiet / --verbose only change the text layout

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, DisplayArgs, ViewModeArgs};
pub use commands::run;
