use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::NavBarViewModel;

/// Bottom navigation bar, one equal-width cell per destination
pub struct NavBarView<'a> {
    model: &'a NavBarViewModel,
}

impl<'a> NavBarView<'a> {
    pub fn new(model: &'a NavBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for NavBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.model.items.is_empty() {
            return;
        }

        let cells = Layout::horizontal(
            self.model
                .items
                .iter()
                .map(|_| Constraint::Ratio(1, self.model.items.len() as u32)),
        )
        .split(inner);

        for (item, cell) in self.model.items.iter().zip(cells.iter()) {
            let label_style = if item.is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", item.shortcut),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format!("{} ", item.icon)),
                Span::styled(item.label.as_str(), label_style),
            ]);
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .render(*cell, buf);
        }
    }
}
