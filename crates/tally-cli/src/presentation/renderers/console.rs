use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::formatters::{accent, muted};
use crate::presentation::view_models::{CommandResultViewModel, CreateView, ViewOptions};

pub struct ConsoleRenderer {
    json_mode: bool,
    options: ViewOptions,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, options: ViewOptions) -> Self {
        Self { json_mode, options }
    }

    /// Write the result to any sink; `render` targets stdout.
    pub fn write_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        let color = self.options.enable_color;

        if let Some(badge) = &result.badge {
            writeln!(out, "{} {}", badge.icon(), badge.label)?;
        }

        write!(out, "{}", result.content.create_view(self.options))?;

        if !result.suggestions.is_empty() {
            writeln!(out, "\n{}", accent("Tips:", color))?;
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    write!(out, ": {}", muted(cmd, color))?;
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, &result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{Guidance, StatusBadge, ViewMode};
    use tally_core::ValueDisplay;

    fn render_string<T: Serialize + CreateView>(
        json_mode: bool,
        result: &CommandResultViewModel<T>,
    ) -> String {
        let renderer = ConsoleRenderer::new(json_mode, ViewOptions::plain(ViewMode::Standard));
        let mut buf = Vec::new();
        renderer.write_to(&mut buf, result).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_with_badge_and_tips() {
        let result = CommandResultViewModel::new(ValueDisplay::new(Some(5)).render())
            .with_badge(StatusBadge::info("Balance"))
            .with_suggestion(Guidance::new("Try compact").with_command("tally value 5 --compact"));

        let text = render_string(false, &result);
        assert_eq!(
            text,
            "ℹ Balance\n◎ 5\n\nTips:\n  • Try compact: tally value 5 --compact\n"
        );
    }

    #[test]
    fn test_json_is_full_view_model() {
        let result = CommandResultViewModel::new(ValueDisplay::new(Some(1500)).render());
        let text = render_string(true, &result);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["content"]["text"], "1,500");
        assert_eq!(value["content"]["accessibility"]["description"], "1,500 coins");
        assert!(value.get("badge").is_none());
    }
}
