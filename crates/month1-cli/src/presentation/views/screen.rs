use std::fmt;

use super::catalogue::EventCardText;
use crate::presentation::view_models::{CreateView, ScreenBody, ScreenViewModel, ViewMode};

impl CreateView for ScreenViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ScreenTextView { data: self, mode })
    }
}

/// Plain text rendering of a screen, top bar to bottom bar
struct ScreenTextView<'a> {
    data: &'a ScreenViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for ScreenTextView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let app_bar = &self.data.app_bar;
        if app_bar.can_navigate_back {
            writeln!(f, "← {}    {}", app_bar.back_label, app_bar.title)?;
        } else {
            writeln!(f, "{}", app_bar.title)?;
        }
        writeln!(f, "{}", "=".repeat(48))?;

        match &self.data.body {
            ScreenBody::Session(session) => {
                if self.mode == ViewMode::Standard {
                    writeln!(f, "{}", session.big_picture.title)?;
                    writeln!(f, "  {}", session.big_picture.body)?;
                    writeln!(f)?;
                }
                for card in &session.pillars {
                    writeln!(f, "▸ {} ({} event(s))", card.name, card.event_count)?;
                    if self.mode == ViewMode::Standard {
                        writeln!(f, "  {}", card.description)?;
                    }
                }
            }
            ScreenBody::Events(list) => {
                if list.events.is_empty() {
                    writeln!(f, "{}", list.empty_message)?;
                }
                for event in &list.events {
                    write!(f, "{}", EventCardText(event))?;
                }
            }
            ScreenBody::Placeholder(placeholder) => {
                writeln!(f, "{}", placeholder.message)?;
            }
        }

        writeln!(f, "{}", "-".repeat(48))?;
        let items: Vec<String> = self
            .data
            .nav_bar
            .items
            .iter()
            .map(|item| {
                if item.is_selected {
                    format!("[{}] *{}*", item.shortcut, item.label)
                } else {
                    format!("[{}] {}", item.shortcut, item.label)
                }
            })
            .collect();
        writeln!(f, "{}", items.join("  "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::{ScreenContext, present_screen};
    use month1_core::{Catalogue, Resources, Router, StateHolder, actions};
    use month1_types::{Destination, Pillar, SessionType};

    fn render(state: &StateHolder, router: &Router, mode: ViewMode) -> String {
        let snapshot = state.read();
        let resources = Resources::builtin();
        let vm = present_screen(&ScreenContext {
            catalogue: Catalogue::builtin(),
            resources: &resources,
            state: &snapshot,
            router,
        });
        vm.create_view(mode).to_string()
    }

    #[test]
    fn test_theory_text_has_big_picture_and_pillars() {
        let text = render(&StateHolder::new(), &Router::default(), ViewMode::Standard);
        assert!(text.starts_with("Theory\n"));
        assert!(text.contains("The Big Picture"));
        assert!(text.contains("▸ Innovation (1 event(s))"));
        assert!(text.contains("[1] *Theory*"));
    }

    #[test]
    fn test_compact_hides_descriptions() {
        let text = render(&StateHolder::new(), &Router::default(), ViewMode::Compact);
        assert!(!text.contains("The Big Picture"));
        assert!(text.contains("▸ Personal Development"));
    }

    #[test]
    fn test_events_text_shows_back_and_notes() {
        let state = StateHolder::new();
        let mut router = Router::default();
        let group = Catalogue::builtin().group(SessionType::Theory);
        actions::open_pillar_events(&state, &mut router, group, Pillar::PersonalDevelopment);

        let text = render(&state, &router, ViewMode::Standard);
        assert!(text.starts_with("← Back    Events\n"));
        assert!(text.contains("How to Learn [Personal Development]"));
        assert!(text.contains("  Key takeaways:"));
        assert!(text.contains("  How I'll apply it:"));
    }

    #[test]
    fn test_placeholder_text() {
        let state = StateHolder::new();
        let mut router = Router::default();
        actions::select_destination(&state, &mut router, Destination::HandsOn);

        let text = render(&state, &router, ViewMode::Standard);
        assert!(text.contains("Nothing here yet."));
        assert!(text.contains("[2] *Hands On*"));
    }
}
