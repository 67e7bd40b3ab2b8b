use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tally_core::{DisplaySize, DEFAULT_ICON, DEFAULT_SEPARATOR, DEFAULT_UNIT};

pub const CONFIG_ENV: &str = "TALLY_CONFIG";

/// Resolve the configuration file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TALLY_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.tally/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("tally").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".tally").join("config.toml"));
    }

    anyhow::bail!("Could not determine config path: no HOME directory or XDG config directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Defaults applied when the matching command-line flag is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Thousands separator for grouped amounts
    pub separator: char,
    /// Decorative icon shown before amounts; empty disables it
    pub icon: String,
    /// Unit noun used in accessibility descriptions
    pub unit: String,
    pub size: DisplaySize,
    pub compact: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_width: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            icon: DEFAULT_ICON.to_string(),
            unit: DEFAULT_UNIT.to_string(),
            size: DisplaySize::default(),
            compact: false,
            progress_width: None,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn icon(&self) -> Option<String> {
        if self.icon.is_empty() {
            None
        } else {
            Some(self.icon.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.separator, ',');
        assert_eq!(config.icon(), Some("◎".to_string()));
        assert_eq!(config.size, DisplaySize::Medium);
        assert!(!config.compact);
    }

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("absent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            separator: '.',
            icon: String::new(),
            unit: "gems".to_string(),
            size: DisplaySize::Large,
            compact: true,
            progress_width: Some(32),
        };
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.icon(), None);
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "size = \"small\"\ncompact = true\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.size, DisplaySize::Small);
        assert!(config.compact);
        assert_eq!(config.unit, "coins");
        Ok(())
    }

    #[test]
    fn test_size_accepts_command_line_spellings() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        std::fs::write(&config_path, "size = \"sm\"\n")?;
        assert_eq!(Config::load_from(&config_path)?.size, DisplaySize::Small);

        std::fs::write(&config_path, "size = \"LARGE\"\n")?;
        assert_eq!(Config::load_from(&config_path)?.size, DisplaySize::Large);
        Ok(())
    }

    #[test]
    fn test_invalid_file_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "size = \"enormous\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some(Path::new("/tmp/tally-test.toml")))?;
        assert_eq!(path, PathBuf::from("/tmp/tally-test.toml"));
        Ok(())
    }
}
