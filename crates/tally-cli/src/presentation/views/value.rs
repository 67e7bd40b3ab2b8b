use std::fmt;

use tally_core::{RenderedValue, PLACEHOLDER};

use crate::presentation::formatters::{accent, muted, sized};
use crate::presentation::view_models::{CreateView, ViewMode, ViewOptions};

impl CreateView for RenderedValue {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ValueView {
            data: self,
            options,
        })
    }
}

struct ValueView<'a> {
    data: &'a RenderedValue,
    options: ViewOptions,
}

impl ValueView<'_> {
    fn render_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = self.options.enable_color;
        let data = self.data;

        let Some(text) = data.text.as_deref().filter(|_| !data.placeholder) else {
            return write!(f, "{}", muted(PLACEHOLDER, color));
        };

        if let Some(icon) = &data.icon {
            write!(f, "{} ", accent(icon, color))?;
        }
        write!(f, "{}", sized(text, data.size, color))?;
        if let Some(label) = &data.label {
            write!(f, " {}", muted(label, color))?;
        }
        Ok(())
    }
}

impl fmt::Display for ValueView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;

        match self.options.mode {
            ViewMode::Minimal => {
                writeln!(f, "{}", data.text.as_deref().unwrap_or(PLACEHOLDER))
            }
            ViewMode::Standard => {
                self.render_line(f)?;
                writeln!(f)
            }
            ViewMode::Verbose => {
                self.render_line(f)?;
                writeln!(f)?;
                writeln!(f, "  class:       {}", data.size_class)?;
                writeln!(f, "  role:        {}", data.accessibility.role)?;
                writeln!(f, "  description: {}", data.accessibility.description)?;
                writeln!(f, "  busy:        {}", data.accessibility.busy)
            }
        }
    }
}
