// Core formatting layer - pure functions and render components.
// The CLI sits on top of this crate; nothing here performs I/O.

pub mod display;
pub mod error;
pub mod format;
pub mod mode;

pub use display::{
    Accessibility, ProgressDisplay, ProgressValue, RenderedProgress, RenderedValue, ValueDisplay,
    DEFAULT_BAR_WIDTH, DEFAULT_ICON, DEFAULT_UNIT, MAX_BAR_WIDTH, PLACEHOLDER,
};
pub use error::{Error, Result};
pub use format::{format_compact, format_grouped, DEFAULT_SEPARATOR};
pub use mode::{DisplayMode, DisplaySize};

// Façade API - the single call contract front ends rely on

/// Render an amount under the given mode with default icon, unit and separator.
pub fn render_value(amount: Option<i64>, mode: &DisplayMode) -> RenderedValue {
    ValueDisplay::new(amount).with_mode(mode.clone()).render()
}

/// Render experience progress under the given mode with the default bar width.
pub fn render_progress(value: ProgressValue, mode: &DisplayMode) -> RenderedProgress {
    ProgressDisplay::new(value).with_mode(mode.clone()).render()
}
