//! Session screen views: the big picture card and the pillar list.

use std::collections::HashSet;

use month1_types::Pillar;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::{count_label, wrap_text};
use crate::presentation::view_models::{BigPictureViewModel, PillarCardViewModel};

pub struct BigPictureView<'a> {
    model: &'a BigPictureViewModel,
}

impl<'a> BigPictureView<'a> {
    pub fn new(model: &'a BigPictureViewModel) -> Self {
        Self { model }
    }

    /// Rows needed to show the whole card at `width`, borders included
    pub fn height(&self, width: u16) -> u16 {
        let inner_width = width.saturating_sub(2) as usize;
        wrap_text(&self.model.body, inner_width).len() as u16 + 2
    }
}

impl<'a> Widget for BigPictureView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                self.model.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL);

        Paragraph::new(self.model.body.as_str())
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Pillar cards as a selectable list. Expanded cards show their description
/// and the hint for opening the pillar's events.
pub struct PillarListView<'a> {
    pillars: &'a [PillarCardViewModel],
    expanded: &'a HashSet<Pillar>,
    width: u16,
}

impl<'a> PillarListView<'a> {
    pub fn new(pillars: &'a [PillarCardViewModel], expanded: &'a HashSet<Pillar>) -> Self {
        Self {
            pillars,
            expanded,
            width: 80,
        }
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn build_list(&self) -> List<'a> {
        let items: Vec<ListItem> = self.pillars.iter().map(|card| self.item(card)).collect();

        List::new(items)
            .block(Block::default().borders(Borders::NONE))
            .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)))
            .highlight_symbol("» ")
    }

    fn item(&self, card: &'a PillarCardViewModel) -> ListItem<'a> {
        let is_expanded = self.expanded.contains(&card.pillar);
        let marker = if is_expanded { "▾" } else { "▸" };

        let mut lines = vec![Line::from(vec![
            Span::raw(format!("{} ", marker)),
            Span::styled(
                card.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", count_label(card.event_count, "event")),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ])];

        if is_expanded {
            let wrap_width = self.width.saturating_sub(6) as usize;
            for line in wrap_text(&card.description, wrap_width) {
                lines.push(Line::from(format!("    {}", line)));
            }
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
                Span::raw(" view events"),
            ]));
        }

        lines.push(Line::from(""));
        ListItem::new(lines)
    }
}
