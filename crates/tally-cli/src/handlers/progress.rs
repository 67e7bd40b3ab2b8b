use crate::args::DisplayArgs;
use crate::config::Config;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use tally_core::{ProgressDisplay, ProgressValue, DEFAULT_BAR_WIDTH};
use terminal_size::{terminal_size_of, Width};

const MAX_AUTO_WIDTH: usize = 40;
// room for level, numbers and percentage around the bar
const LINE_MARGIN: usize = 40;

pub struct ProgressRequest {
    pub current: Option<i64>,
    pub required: Option<i64>,
    pub level: Option<u32>,
    pub width: Option<usize>,
    pub display: DisplayArgs,
}

pub fn handle(ctx: &HandlerContext, config: &Config, request: ProgressRequest) -> Result<()> {
    let mode = request.display.resolve(config);
    let width = request
        .width
        .or(config.progress_width)
        .unwrap_or_else(auto_width);

    let mut value = ProgressValue::new(request.current, request.required);
    if let Some(level) = request.level {
        value = value.at_level(level);
    }

    log::debug!("progress value={:?} width={} mode={:?}", value, width, mode);

    let rendered = ProgressDisplay::new(value)
        .with_mode(mode)
        .with_width(width)
        .with_separator(config.separator)
        .render();

    ctx.render(presenters::present_progress(rendered))
}

/// Bar width derived from the terminal on stdout, or the default when piped.
fn auto_width() -> usize {
    match terminal_size_of(std::io::stdout()) {
        Some((Width(columns), _)) => bar_width_for(columns as usize),
        None => DEFAULT_BAR_WIDTH,
    }
}

fn bar_width_for(columns: usize) -> usize {
    columns.saturating_sub(LINE_MARGIN).clamp(10, MAX_AUTO_WIDTH)
}
