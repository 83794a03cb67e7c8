use std::io::{self, Write};

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, StatusBadge, StatusLevel, ViewMode,
};

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
    mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            color: io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
            mode: ViewMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ViewMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn badge_line(&self, badge: &StatusBadge) -> String {
        if !self.color {
            return format!("{} {}", badge.icon(), badge.label);
        }
        match badge.level {
            StatusLevel::Success => format!("{} {}", badge.icon(), badge.label.green().bold()),
            StatusLevel::Info => format!("{} {}", badge.icon(), badge.label.bold()),
            StatusLevel::Error => format!("{} {}", badge.icon(), badge.label.red().bold()),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            writeln!(out, "{}", self.badge_line(badge))?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.mode))?;

        if !result.suggestions.is_empty() {
            let heading = "💡 Tips:";
            if self.color {
                writeln!(out, "\n{}", heading.yellow().bold())?;
            } else {
                writeln!(out, "\n{}", heading)?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_badge_has_no_escape_codes() {
        let renderer = ConsoleRenderer::new(false).with_color(false);
        let line = renderer.badge_line(&StatusBadge::error("2 catalogue issue(s) found"));
        assert_eq!(line, "❌ 2 catalogue issue(s) found");
    }

    #[test]
    fn test_colored_badge_keeps_label() {
        let renderer = ConsoleRenderer::new(false).with_color(true);
        let line = renderer.badge_line(&StatusBadge::success("Catalogue is consistent"));
        assert!(line.contains("\u{1b}["));
        assert!(line.contains("Catalogue is consistent"));
    }
}
