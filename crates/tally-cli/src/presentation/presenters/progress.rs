use tally_core::RenderedProgress;

use crate::presentation::view_models::{CommandResultViewModel, StatusBadge};

pub fn present_progress(rendered: RenderedProgress) -> CommandResultViewModel<RenderedProgress> {
    let ready = !rendered.placeholder && rendered.required > 0 && rendered.percent >= 100;
    let next_level = rendered.level.saturating_add(1);

    let result = CommandResultViewModel::new(rendered);
    if ready {
        result.with_badge(StatusBadge::success(format!(
            "Ready for level {}",
            next_level
        )))
    } else {
        result
    }
}
