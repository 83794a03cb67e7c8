//! Session Component
//!
//! Owns the pillar list cursor and the set of expanded pillar cards.

use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent};
use month1_types::Pillar;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::ListState,
};

use crate::presentation::view_models::SessionScreenViewModel;
use crate::presentation::views::tui::{BigPictureView, PillarListView};

/// Actions the session screen can emit to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Open the events of a pillar
    OpenEvents(Pillar),
}

pub struct SessionComponent {
    state: ListState,
    expanded: HashSet<Pillar>,
}

impl SessionComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default().with_selected(Some(0)),
            expanded: HashSet::new(),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn is_expanded(&self, pillar: Pillar) -> bool {
        self.expanded.contains(&pillar)
    }

    /// Handle keyboard input
    ///
    /// Enter on a collapsed card expands it; Enter on an expanded card opens
    /// its events.
    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        data: &SessionScreenViewModel,
    ) -> Option<SessionAction> {
        let len = data.pillars.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next(len);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                None
            }
            KeyCode::Char(' ') | KeyCode::Char('l') | KeyCode::Right => {
                if let Some(pillar) = self.selected_pillar(data) {
                    self.toggle(pillar);
                }
                None
            }
            KeyCode::Enter => {
                let pillar = self.selected_pillar(data)?;
                if self.expanded.contains(&pillar) {
                    Some(SessionAction::OpenEvents(pillar))
                } else {
                    self.expanded.insert(pillar);
                    None
                }
            }
            _ => None,
        }
    }

    /// Render the big picture card above the pillar list
    ///
    /// Performs index safety check before rendering.
    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &SessionScreenViewModel) {
        // Index Safety: Clamp selection to data bounds
        if data.pillars.is_empty() {
            self.state.select(None);
        } else {
            match self.state.selected() {
                Some(selected) if selected >= data.pillars.len() => {
                    self.state.select(Some(data.pillars.len() - 1));
                }
                None => self.state.select(Some(0)),
                _ => {}
            }
        }

        let big_picture = BigPictureView::new(&data.big_picture);
        let card_height = big_picture.height(area.width).min(area.height / 2);
        let [card_area, list_area] =
            Layout::vertical([Constraint::Length(card_height), Constraint::Min(0)]).areas(area);

        f.render_widget(big_picture, card_area);

        let list = PillarListView::new(&data.pillars, &self.expanded)
            .width(list_area.width)
            .build_list();
        f.render_stateful_widget(list, list_area, &mut self.state);
    }

    fn selected_pillar(&self, data: &SessionScreenViewModel) -> Option<Pillar> {
        self.state
            .selected()
            .and_then(|i| data.pillars.get(i))
            .map(|card| card.pillar)
    }

    fn toggle(&mut self, pillar: Pillar) {
        if !self.expanded.remove(&pillar) {
            self.expanded.insert(pillar);
        }
    }

    fn next(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }

        let next = match self.state.selected() {
            Some(i) if i >= data_len - 1 => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn previous(&mut self) {
        let prev = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(prev));
    }
}

impl Default for SessionComponent {
    fn default() -> Self {
        Self::new()
    }
}
