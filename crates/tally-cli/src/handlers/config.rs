use crate::config::Config;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use std::path::Path;

pub fn show(ctx: &HandlerContext, config_path: &Path) -> Result<()> {
    let exists = config_path.exists();
    let config = Config::load_from(config_path)?;
    ctx.render(presenters::present_config(config_path, exists, config))
}

pub fn init(ctx: &HandlerContext, config_path: &Path, force: bool) -> Result<()> {
    let exists = config_path.exists();
    if exists && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(config_path)?;
    log::info!("wrote default config to {}", config_path.display());

    ctx.render(presenters::present_config_init(config_path, exists))
}

pub fn path(ctx: &HandlerContext, config_path: &Path) -> Result<()> {
    ctx.render(presenters::present_config_path(config_path))
}
