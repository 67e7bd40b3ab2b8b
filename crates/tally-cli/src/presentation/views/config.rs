use std::fmt;

use crate::presentation::view_models::{
    ConfigInitViewModel, ConfigPathViewModel, ConfigViewModel, CreateView, ViewMode, ViewOptions,
};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView {
            data: self,
            mode: options.mode,
        })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    mode: ViewMode,
}

impl fmt::Display for ConfigView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = &self.data.config;

        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.path);
        }

        let source = if self.data.exists {
            "file"
        } else {
            "defaults"
        };
        writeln!(f, "Config: {} ({})", self.data.path, source)?;
        writeln!(f, "  separator:      {:?}", config.separator)?;
        writeln!(
            f,
            "  icon:           {}",
            config.icon().as_deref().unwrap_or("(none)")
        )?;
        writeln!(f, "  unit:           {}", config.unit)?;
        writeln!(f, "  size:           {}", config.size)?;
        writeln!(f, "  compact:        {}", config.compact)?;
        match config.progress_width {
            Some(width) => writeln!(f, "  progress_width: {}", width),
            None => writeln!(f, "  progress_width: (terminal)"),
        }
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView { data: self })
    }
}

struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl fmt::Display for ConfigInitView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wrote default configuration to {}", self.data.path)
    }
}

impl CreateView for ConfigPathViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigPathView { data: self })
    }
}

struct ConfigPathView<'a> {
    data: &'a ConfigPathViewModel,
}

impl fmt::Display for ConfigPathView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.data.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_config_view_lists_fields() {
        let vm = ConfigViewModel {
            path: "/tmp/tally/config.toml".to_string(),
            exists: false,
            config: Config::default(),
        };
        let text = vm
            .create_view(ViewOptions::plain(ViewMode::Standard))
            .to_string();
        assert!(text.starts_with("Config: /tmp/tally/config.toml (defaults)\n"));
        assert!(text.contains("  separator:      ','\n"));
        assert!(text.contains("  icon:           ◎\n"));
        assert!(text.contains("  progress_width: (terminal)\n"));
    }

    #[test]
    fn test_config_view_minimal_is_path() {
        let vm = ConfigViewModel {
            path: "/etc/tally.toml".to_string(),
            exists: true,
            config: Config::default(),
        };
        let text = vm
            .create_view(ViewOptions::plain(ViewMode::Minimal))
            .to_string();
        assert_eq!(text, "/etc/tally.toml\n");
    }
}
