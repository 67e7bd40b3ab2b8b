use super::args::{Cli, Commands, ConfigCommand, ViewModeArgs};
use super::handlers::{self, HandlerContext};
use crate::config::{resolve_config_path, Config};
use crate::logging;
use anyhow::Result;
use clap::CommandFactory;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config_path = resolve_config_path(cli.config.as_deref())?;
    log::debug!("config path: {}", config_path.display());

    match command {
        Commands::Value {
            amount,
            unit,
            icon,
            display,
            view_mode,
        } => {
            let ctx = HandlerContext::new(cli.format, &view_mode, cli.no_color);
            let config = Config::load_from(&config_path)?;
            handlers::value::handle(
                &ctx,
                &config,
                handlers::value::ValueRequest {
                    amount,
                    unit,
                    icon,
                    display,
                },
            )
        }

        Commands::Progress {
            current,
            required,
            level,
            width,
            display,
            view_mode,
        } => {
            let ctx = HandlerContext::new(cli.format, &view_mode, cli.no_color);
            let config = Config::load_from(&config_path)?;
            handlers::progress::handle(
                &ctx,
                &config,
                handlers::progress::ProgressRequest {
                    current,
                    required,
                    level,
                    width,
                    display,
                },
            )
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show { view_mode } => {
                let ctx = HandlerContext::new(cli.format, &view_mode, cli.no_color);
                handlers::config::show(&ctx, &config_path)
            }
            ConfigCommand::Init { force } => {
                let ctx = HandlerContext::new(cli.format, &ViewModeArgs::default(), cli.no_color);
                handlers::config::init(&ctx, &config_path, force)
            }
            ConfigCommand::Path => {
                let ctx = HandlerContext::new(cli.format, &ViewModeArgs::default(), cli.no_color);
                handlers::config::path(&ctx, &config_path)
            }
        },
    }
}
