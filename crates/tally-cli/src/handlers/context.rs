use crate::args::ViewModeArgs;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, ViewOptions};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub options: ViewOptions,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, view_mode: &ViewModeArgs, no_color: bool) -> Self {
        let enable_color = !no_color
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal();

        Self {
            format,
            options: ViewOptions::new(view_mode.resolve(), enable_color),
        }
    }

    /// Render a view model using the configured format and view options
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format == OutputFormat::Json, self.options);
        renderer.render(view_model)
    }
}
