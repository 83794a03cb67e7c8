use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::AppBarViewModel;

/// Top app bar: centred title, back hint on the left when available
pub struct AppBarView<'a> {
    model: &'a AppBarViewModel,
}

impl<'a> AppBarView<'a> {
    pub fn new(model: &'a AppBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for AppBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let title = Paragraph::new(Line::from(Span::styled(
            self.model.title.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        title.render(inner, buf);

        if self.model.can_navigate_back {
            let back = Paragraph::new(Line::from(vec![
                Span::styled("[b]", Style::default().fg(Color::Yellow)),
                Span::raw(format!(" ← {}", self.model.back_label)),
            ]));
            back.render(inner, buf);
        }
    }
}
