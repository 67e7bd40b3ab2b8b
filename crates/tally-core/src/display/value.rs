use super::{Accessibility, PLACEHOLDER};
use crate::format::{format_amount, format_grouped_with, DEFAULT_SEPARATOR};
use crate::mode::{DisplayMode, DisplaySize};
use serde::Serialize;
use std::fmt;

pub const DEFAULT_ICON: &str = "◎";
pub const DEFAULT_UNIT: &str = "coins";

/// Formatted Value Display: an amount rendered under a [`DisplayMode`].
///
/// ```
/// use tally_core::{DisplayMode, ValueDisplay};
///
/// let rendered = ValueDisplay::new(Some(1500))
///     .with_mode(DisplayMode::new().compact(true))
///     .render();
/// assert_eq!(rendered.text.as_deref(), Some("1.5K"));
/// assert!(rendered.accessibility.description.contains("1,500"));
/// ```
#[derive(Debug, Clone)]
pub struct ValueDisplay {
    amount: i64,
    mode: DisplayMode,
    separator: char,
    icon: Option<String>,
    unit: String,
}

impl ValueDisplay {
    /// Absent amounts render as zero.
    pub fn new(amount: Option<i64>) -> Self {
        Self {
            amount: amount.unwrap_or(0),
            mode: DisplayMode::default(),
            separator: DEFAULT_SEPARATOR,
            icon: Some(DEFAULT_ICON.to_string()),
            unit: DEFAULT_UNIT.to_string(),
        }
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Decorative icon; `None` or an empty string renders no icon.
    pub fn with_icon(mut self, icon: Option<String>) -> Self {
        self.icon = icon.filter(|i| !i.is_empty());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn render(&self) -> RenderedValue {
        let mode = &self.mode;
        let grouped = format_grouped_with(self.amount, self.separator);

        let description = match (&mode.label, self.unit.trim()) {
            (Some(label), "") => format!("{label}: {grouped}"),
            (Some(label), unit) => format!("{label}: {grouped} {unit}"),
            (None, "") => grouped,
            (None, unit) => format!("{grouped} {unit}"),
        };
        let accessibility = Accessibility::new("status", description).busy(mode.is_loading);

        let (text, icon) = if mode.is_loading {
            (None, None)
        } else {
            (
                Some(format_amount(self.amount, mode.compact, self.separator)),
                self.icon.clone(),
            )
        };

        log::trace!(
            "render value amount={} loading={} compact={} size={}",
            self.amount,
            mode.is_loading,
            mode.compact,
            mode.size
        );

        RenderedValue {
            amount: self.amount,
            text,
            placeholder: mode.is_loading,
            icon,
            size: mode.size,
            size_class: size_class(mode.size),
            label: mode.label.clone(),
            accessibility,
        }
    }
}

fn size_class(size: DisplaySize) -> &'static str {
    match size {
        DisplaySize::Small => "value-display--small",
        DisplaySize::Medium => "value-display--medium",
        DisplaySize::Large => "value-display--large",
    }
}

/// Output of [`ValueDisplay::render`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedValue {
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub placeholder: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub size: DisplaySize,
    pub size_class: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub accessibility: Accessibility,
}

impl fmt::Display for RenderedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.placeholder {
            return write!(f, "{PLACEHOLDER}");
        }

        if let Some(icon) = &self.icon {
            write!(f, "{icon} ")?;
        }
        if let Some(text) = &self.text {
            write!(f, "{text}")?;
        }
        if let Some(label) = &self.label {
            write!(f, " {label}")?;
        }
        Ok(())
    }
}
