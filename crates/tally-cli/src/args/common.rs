use crate::config::Config;
use crate::presentation::ViewMode;
use clap::Args;
use tally_core::{DisplayMode, DisplaySize};

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (formatted value only, for scripting)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(
        long,
        help = "Verbose output (size class and accessibility metadata)",
        group = "view_mode"
    )]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> ViewMode {
        if self.quiet {
            ViewMode::Minimal
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}

/// Display flags shared by every component command.
#[derive(Debug, Clone, Default, Args)]
pub struct DisplayArgs {
    #[arg(long, help = "Abbreviate large values with K/M suffixes")]
    pub compact: bool,

    #[arg(long, help = "Render the loading placeholder instead of the value")]
    pub loading: bool,

    #[arg(long, help = "Visual scale: small, medium or large")]
    pub size: Option<DisplaySize>,

    #[arg(long, help = "Static text shown next to the value")]
    pub label: Option<String>,
}

impl DisplayArgs {
    /// Merge flags with config defaults. Flags can only switch compact on.
    pub fn resolve(&self, config: &Config) -> DisplayMode {
        let mut mode = DisplayMode::new()
            .loading(self.loading)
            .compact(self.compact || config.compact)
            .size(self.size.unwrap_or(config.size));
        if let Some(label) = &self.label {
            mode = mode.label(label.clone());
        }
        mode
    }
}
