use std::fmt;

use tally_core::{RenderedProgress, PLACEHOLDER};

use crate::presentation::formatters::{gauge, muted, sized};
use crate::presentation::view_models::{CreateView, ViewMode, ViewOptions};

impl CreateView for RenderedProgress {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ProgressView {
            data: self,
            options,
        })
    }
}

struct ProgressView<'a> {
    data: &'a RenderedProgress,
    options: ViewOptions,
}

impl ProgressView<'_> {
    fn render_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = self.options.enable_color;
        let data = self.data;

        if let Some(label) = &data.label {
            write!(f, "{} ", muted(label, color))?;
        }
        write!(f, "{}", sized(&format!("Lv {}", data.level), data.size, color))?;

        match (&data.bar, &data.text) {
            (Some(bar), Some(text)) => write!(
                f,
                " {} {} XP ({}%)",
                gauge(bar, data.percent, color),
                sized(text, data.size, color),
                data.percent
            ),
            _ => write!(f, " {}", muted(PLACEHOLDER, color)),
        }
    }
}

impl fmt::Display for ProgressView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;

        match self.options.mode {
            ViewMode::Minimal => match &data.text {
                Some(_) => writeln!(f, "{}", data.percent),
                None => writeln!(f, "{PLACEHOLDER}"),
            },
            ViewMode::Standard => {
                self.render_line(f)?;
                writeln!(f)
            }
            ViewMode::Verbose => {
                let a11y = &data.accessibility;
                self.render_line(f)?;
                writeln!(f)?;
                writeln!(f, "  class:       {}", data.size_class)?;
                writeln!(f, "  role:        {}", a11y.role)?;
                writeln!(f, "  description: {}", a11y.description)?;
                writeln!(
                    f,
                    "  range:       {} ({}..={})",
                    a11y.value_now.unwrap_or_default(),
                    a11y.value_min.unwrap_or_default(),
                    a11y.value_max.unwrap_or_default()
                )?;
                writeln!(f, "  busy:        {}", a11y.busy)
            }
        }
    }
}
