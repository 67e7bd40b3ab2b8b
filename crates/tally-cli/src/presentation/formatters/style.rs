use owo_colors::OwoColorize;
use tally_core::DisplaySize;

/// Apply the visual scale of `size`: large is bold, small is dimmed.
pub fn sized(text: &str, size: DisplaySize, enable_color: bool) -> String {
    if !enable_color {
        return text.to_string();
    }
    match size {
        DisplaySize::Small => text.dimmed().to_string(),
        DisplaySize::Medium => text.bright_white().to_string(),
        DisplaySize::Large => text.bright_white().bold().to_string(),
    }
}

pub fn accent(text: &str, enable_color: bool) -> String {
    if enable_color {
        text.yellow().to_string()
    } else {
        text.to_string()
    }
}

pub fn muted(text: &str, enable_color: bool) -> String {
    if enable_color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

/// Color a progress bar; a full bar turns green.
pub fn gauge(bar: &str, percent: u8, enable_color: bool) -> String {
    if !enable_color {
        return bar.to_string();
    }
    if percent >= 100 {
        bar.green().bold().to_string()
    } else {
        bar.cyan().to_string()
    }
}
