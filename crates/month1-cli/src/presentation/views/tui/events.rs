use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::presentation::formatters::wrap_text;
use crate::presentation::view_models::{EventListViewModel, PlaceholderViewModel};

/// Event cards stacked as one scrollable paragraph.
///
/// Text is wrapped here rather than by the paragraph, so one `Line` is
/// exactly one terminal row and the scroll range is known before drawing.
pub struct EventListView<'a> {
    model: &'a EventListViewModel,
}

impl<'a> EventListView<'a> {
    pub fn new(model: &'a EventListViewModel) -> Self {
        Self { model }
    }

    /// Rows for a body `width` columns wide
    pub fn lines(&self, width: u16) -> Vec<Line<'a>> {
        let width = width.max(1) as usize;
        let mut lines = Vec::new();

        if self.model.events.is_empty() {
            push_wrapped(
                &mut lines,
                &self.model.empty_message,
                "",
                width,
                Style::default().add_modifier(Modifier::ITALIC),
            );
            return lines;
        }

        let label_style = Style::default().fg(Color::Yellow);
        for event in &self.model.events {
            push_wrapped(
                &mut lines,
                &event.title,
                "",
                width,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
            let rule = event.title.chars().count().max(8).min(width);
            lines.push(Line::from(Span::styled(
                "─".repeat(rule),
                Style::default().fg(Color::DarkGray),
            )));

            push_wrapped(&mut lines, &event.takeaways_label, "", width, label_style);
            push_wrapped(&mut lines, &event.takeaways, "  ", width, Style::default());

            push_wrapped(&mut lines, &event.apply_label, "", width, label_style);
            push_wrapped(
                &mut lines,
                &event.application_notes,
                "  ",
                width,
                Style::default(),
            );
            lines.push(Line::from(""));
        }

        lines
    }
}

fn push_wrapped<'a>(
    lines: &mut Vec<Line<'a>>,
    text: &str,
    indent: &str,
    width: usize,
    style: Style,
) {
    let indent = if indent.len() < width { indent } else { "" };
    for row in wrap_text(text, width - indent.len()) {
        lines.push(Line::from(Span::styled(format!("{}{}", indent, row), style)));
    }
}

pub struct PlaceholderView<'a> {
    model: &'a PlaceholderViewModel,
}

impl<'a> PlaceholderView<'a> {
    pub fn new(model: &'a PlaceholderViewModel) -> Self {
        Self { model }
    }

    pub fn build_paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(Line::from(Span::styled(
            self.model.message.as_str(),
            Style::default().add_modifier(Modifier::DIM),
        )))
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: true })
    }
}
