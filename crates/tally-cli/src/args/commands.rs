use super::common::{DisplayArgs, ViewModeArgs};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Render an amount (currency, points, ...)")]
    Value {
        #[arg(allow_negative_numbers = true, help = "Amount to render (defaults to 0)")]
        amount: Option<i64>,

        #[arg(long, help = "Unit noun used in the accessibility description")]
        unit: Option<String>,

        #[arg(long, help = "Decorative icon (empty string disables it)")]
        icon: Option<String>,

        #[command(flatten)]
        display: DisplayArgs,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Render experience progress towards the next level")]
    Progress {
        #[arg(long, allow_negative_numbers = true, help = "Points earned in the current level")]
        current: Option<i64>,

        #[arg(long, allow_negative_numbers = true, help = "Points required for the next level")]
        required: Option<i64>,

        #[arg(long, help = "Current level (defaults to 1)")]
        level: Option<u32>,

        #[arg(long, help = "Bar width in cells")]
        width: Option<usize>,

        #[command(flatten)]
        display: DisplayArgs,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Inspect or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the effective configuration")]
    Show {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Write a configuration file with default values")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },

    #[command(about = "Print the resolved configuration file path")]
    Path,
}
