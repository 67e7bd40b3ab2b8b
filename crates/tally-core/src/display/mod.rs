//! Render components.
//!
//! A component takes raw input plus a [`DisplayMode`](crate::DisplayMode) and
//! produces a rendered record: the visible pieces (text, icon, bar) as data,
//! plus an [`Accessibility`] record that screen-reader front ends expose.
//! Rendered records implement `Serialize` for JSON output and `Display` for
//! plain-text output.

mod progress;
mod value;

pub use progress::{
    ProgressDisplay, ProgressValue, RenderedProgress, DEFAULT_BAR_WIDTH, MAX_BAR_WIDTH,
};
pub use value::{RenderedValue, ValueDisplay, DEFAULT_ICON, DEFAULT_UNIT};

use serde::Serialize;

/// Text shown in place of any content while a component is loading.
pub const PLACEHOLDER: &str = "…";

/// Machine-readable description of a rendered container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accessibility {
    pub role: &'static str,
    pub description: String,
    pub busy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_now: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_max: Option<i64>,
}

impl Accessibility {
    pub fn new(role: &'static str, description: String) -> Self {
        Self {
            role,
            description,
            busy: false,
            value_now: None,
            value_min: None,
            value_max: None,
        }
    }

    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    pub fn range(mut self, now: i64, min: i64, max: i64) -> Self {
        self.value_now = Some(now);
        self.value_min = Some(min);
        self.value_max = Some(max);
        self
    }
}
