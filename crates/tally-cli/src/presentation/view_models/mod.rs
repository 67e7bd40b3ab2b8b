mod common;
mod config;
mod result;

pub use common::{Guidance, StatusBadge, StatusLevel, ViewMode, ViewOptions};
pub use config::{ConfigInitViewModel, ConfigPathViewModel, ConfigViewModel};
pub use result::CommandResultViewModel;

use std::fmt;

/// Bridge from a view model to its text layout.
pub trait CreateView {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a>;
}
