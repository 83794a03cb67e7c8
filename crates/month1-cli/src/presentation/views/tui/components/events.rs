//! Events Component
//!
//! Scroll state for the filtered event list.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::Text,
    widgets::Paragraph,
};

use crate::presentation::view_models::EventListViewModel;
use crate::presentation::views::tui::EventListView;

const PAGE: u16 = 10;

#[derive(Debug, Default)]
pub struct EventsComponent {
    scroll: u16,
    max_scroll: u16,
}

impl EventsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Back to the top, used when the event list is replaced
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    pub fn handle_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(PAGE),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.max_scroll,
            _ => {}
        }
        self.scroll = self.scroll.min(self.max_scroll);
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &EventListViewModel) {
        let lines = EventListView::new(data).lines(area.width);

        // Index Safety: lines are pre-wrapped, so one line is one row
        let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        self.max_scroll = total.saturating_sub(area.height);
        self.scroll = self.scroll.min(self.max_scroll);

        let paragraph = Paragraph::new(Text::from(lines)).scroll((self.scroll, 0));
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::EventCardViewModel;
    use crossterm::event::KeyModifiers;
    use month1_types::Pillar;
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_scroll_is_clamped_before_first_render() {
        let mut component = EventsComponent::new();
        component.handle_input(key(KeyCode::Down));
        assert_eq!(component.scroll(), 0);
    }

    fn model(takeaways: &str, notes: &str) -> EventListViewModel {
        EventListViewModel {
            events: vec![EventCardViewModel {
                category: Pillar::Innovation,
                title: "Intro".to_string(),
                takeaways_label: "Key takeaways".to_string(),
                takeaways: takeaways.to_string(),
                apply_label: "How I'll apply it".to_string(),
                application_notes: notes.to_string(),
            }],
            empty_message: "No events".to_string(),
        }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_end_reaches_last_note_on_narrow_terminal() {
        let data = model(
            "aaaaaa bbbbbb cccccc dddddd eeeeee ffffff gggggg hhhhhh",
            "LASTNOTE",
        );
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        let mut component = EventsComponent::new();

        terminal
            .draw(|f| component.render(f, f.area(), &data))
            .unwrap();
        assert!(!buffer_text(&terminal).contains("LASTNOTE"));

        component.handle_input(key(KeyCode::End));
        terminal
            .draw(|f| component.render(f, f.area(), &data))
            .unwrap();
        assert!(buffer_text(&terminal).contains("LASTNOTE"));
    }

    #[test]
    fn test_scroll_range_counts_wrapped_rows() {
        let data = model("one two three four", "five");
        let mut terminal = Terminal::new(TestBackend::new(12, 4)).unwrap();
        let mut component = EventsComponent::new();
        terminal
            .draw(|f| component.render(f, f.area(), &data))
            .unwrap();

        let rows = EventListView::new(&data).lines(12).len() as u16;
        component.handle_input(key(KeyCode::End));
        assert_eq!(component.scroll(), rows - 4);
    }

    #[test]
    fn test_reset_returns_to_top() {
        let mut component = EventsComponent {
            scroll: 4,
            max_scroll: 8,
        };
        component.handle_input(key(KeyCode::PageDown));
        assert_eq!(component.scroll(), 8);

        component.reset();
        assert_eq!(component.scroll(), 0);
    }
}
