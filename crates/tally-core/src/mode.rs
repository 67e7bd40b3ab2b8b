use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual scale of a rendered component. Exactly one applies per render.
///
/// Deserialization goes through [`FromStr`], so config files accept the same
/// spellings as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DisplaySize {
    Small,
    #[default]
    Medium,
    Large,
}

impl DisplaySize {
    pub const ALL: [DisplaySize; 3] = [DisplaySize::Small, DisplaySize::Medium, DisplaySize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplaySize::Small => "small",
            DisplaySize::Medium => "medium",
            DisplaySize::Large => "large",
        }
    }
}

impl fmt::Display for DisplaySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DisplaySize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "sm" => Ok(DisplaySize::Small),
            "medium" | "md" => Ok(DisplaySize::Medium),
            "large" | "lg" => Ok(DisplaySize::Large),
            _ => Err(Error::InvalidSize(s.to_string())),
        }
    }
}

impl TryFrom<String> for DisplaySize {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Independent display flags shared by every component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMode {
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default)]
    pub compact: bool,
    #[serde(default)]
    pub size: DisplaySize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DisplayMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn size(mut self, size: DisplaySize) -> Self {
        self.size = size;
        self
    }

    /// Set the label. Blank labels are treated as absent.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.label = if label.trim().is_empty() {
            None
        } else {
            Some(label)
        };
        self
    }
}
