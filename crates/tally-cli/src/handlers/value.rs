use crate::args::DisplayArgs;
use crate::config::Config;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use tally_core::ValueDisplay;

pub struct ValueRequest {
    pub amount: Option<i64>,
    pub unit: Option<String>,
    pub icon: Option<String>,
    pub display: DisplayArgs,
}

pub fn handle(ctx: &HandlerContext, config: &Config, request: ValueRequest) -> Result<()> {
    let mode = request.display.resolve(config);
    let icon = request.icon.or_else(|| config.icon());
    let unit = request.unit.unwrap_or_else(|| config.unit.clone());

    log::debug!("value amount={:?} mode={:?}", request.amount, mode);

    let rendered = ValueDisplay::new(request.amount)
        .with_mode(mode)
        .with_separator(config.separator)
        .with_icon(icon)
        .with_unit(unit)
        .render();

    ctx.render(presenters::present_value(rendered))
}
