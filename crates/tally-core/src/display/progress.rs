use super::{Accessibility, PLACEHOLDER};
use crate::format::{format_amount, format_grouped_with, DEFAULT_SEPARATOR};
use crate::mode::{DisplayMode, DisplaySize};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_BAR_WIDTH: usize = 20;
pub const MAX_BAR_WIDTH: usize = 200;

const FILLED: char = '█';
const EMPTY: char = '░';

/// Experience towards the next level. Absent fields default to 0 / 0 / level 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressValue {
    #[serde(default)]
    pub current: Option<i64>,
    #[serde(default)]
    pub required: Option<i64>,
    #[serde(default)]
    pub level: Option<u32>,
}

impl ProgressValue {
    pub fn new(current: Option<i64>, required: Option<i64>) -> Self {
        Self {
            current,
            required,
            level: None,
        }
    }

    pub fn at_level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }
}

/// Experience bar component.
#[derive(Debug, Clone)]
pub struct ProgressDisplay {
    value: ProgressValue,
    mode: DisplayMode,
    width: usize,
    separator: char,
}

impl ProgressDisplay {
    pub fn new(value: ProgressValue) -> Self {
        Self {
            value,
            mode: DisplayMode::default(),
            width: DEFAULT_BAR_WIDTH,
            separator: DEFAULT_SEPARATOR,
        }
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    /// Bar width in cells, clamped to `1..=MAX_BAR_WIDTH`.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.clamp(1, MAX_BAR_WIDTH);
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn render(&self) -> RenderedProgress {
        let mode = &self.mode;
        let current = self.value.current.unwrap_or(0).max(0);
        let required = self.value.required.unwrap_or(0).max(0);
        let level = self.value.level.unwrap_or(1);

        let (ratio, percent, filled) = if required == 0 {
            (0.0, 0, 0)
        } else {
            let capped = current.min(required) as i128;
            let percent = (capped * 100 / required as i128) as u8;
            let filled = (capped * self.width as i128 / required as i128) as usize;
            (capped as f64 / required as f64, percent, filled)
        };

        let description = format!(
            "Level {}: {} of {} XP",
            level,
            format_grouped_with(current, self.separator),
            format_grouped_with(required, self.separator)
        );
        let accessibility = Accessibility::new("progressbar", description)
            .busy(mode.is_loading)
            .range(current.min(required), 0, required);

        let (bar, text) = if mode.is_loading {
            (None, None)
        } else {
            let bar = format!(
                "[{}{}]",
                FILLED.to_string().repeat(filled),
                EMPTY.to_string().repeat(self.width - filled)
            );
            let text = format!(
                "{} / {}",
                format_amount(current, mode.compact, self.separator),
                format_amount(required, mode.compact, self.separator)
            );
            (Some(bar), Some(text))
        };

        log::trace!(
            "render progress current={} required={} level={} loading={}",
            current,
            required,
            level,
            mode.is_loading
        );

        RenderedProgress {
            level,
            current,
            required,
            ratio,
            percent,
            bar,
            text,
            placeholder: mode.is_loading,
            size: mode.size,
            size_class: size_class(mode.size),
            label: mode.label.clone(),
            accessibility,
        }
    }
}

fn size_class(size: DisplaySize) -> &'static str {
    match size {
        DisplaySize::Small => "progress-display--small",
        DisplaySize::Medium => "progress-display--medium",
        DisplaySize::Large => "progress-display--large",
    }
}

/// Output of [`ProgressDisplay::render`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedProgress {
    pub level: u32,
    pub current: i64,
    pub required: i64,
    pub ratio: f64,
    pub percent: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub placeholder: bool,
    pub size: DisplaySize,
    pub size_class: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub accessibility: Accessibility,
}

impl fmt::Display for RenderedProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "{label} ")?;
        }
        write!(f, "Lv {}", self.level)?;

        match (&self.bar, &self.text) {
            (Some(bar), Some(text)) => write!(f, " {} {} XP ({}%)", bar, text, self.percent),
            _ => write!(f, " {PLACEHOLDER}"),
        }
    }
}
