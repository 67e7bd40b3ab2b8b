use tally_core::RenderedValue;

use crate::presentation::view_models::CommandResultViewModel;

pub fn present_value(rendered: RenderedValue) -> CommandResultViewModel<RenderedValue> {
    CommandResultViewModel::new(rendered)
}
