use std::path::Path;

use crate::config::Config;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigPathViewModel, ConfigViewModel, Guidance,
    StatusBadge,
};

pub fn present_config(
    path: &Path,
    exists: bool,
    config: Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let content = ConfigViewModel {
        path: path.display().to_string(),
        exists,
        config,
    };

    let result = CommandResultViewModel::new(content);
    if exists {
        result
    } else {
        result
            .with_badge(StatusBadge::info("No config file, using built-in defaults"))
            .with_suggestion(
                Guidance::new("Create a config file to customize defaults")
                    .with_command("tally config init"),
            )
    }
}

pub fn present_config_init(
    path: &Path,
    overwritten: bool,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let content = ConfigInitViewModel {
        path: path.display().to_string(),
        overwritten,
    };

    let badge = if overwritten {
        StatusBadge::warning("Existing configuration replaced")
    } else {
        StatusBadge::success("Configuration created")
    };

    CommandResultViewModel::new(content)
        .with_badge(badge)
        .with_suggestion(
            Guidance::new("Review the effective settings").with_command("tally config show"),
        )
}

pub fn present_config_path(path: &Path) -> CommandResultViewModel<ConfigPathViewModel> {
    CommandResultViewModel::new(ConfigPathViewModel {
        path: path.display().to_string(),
    })
}
