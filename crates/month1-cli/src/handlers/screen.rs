use anyhow::Result;
use month1_core::{Catalogue, Resources, Router, StateHolder, actions};
use month1_types::{Destination, Pillar, SessionType};

use crate::presentation::presenters::{ScreenContext, present_screen};
use crate::presentation::view_models::CommandResultViewModel;
use crate::presentation::{ConsoleRenderer, Renderer};

/// Build one screen the way the TUI would after the given steps, then print it.
///
/// With a selection the pillar's events are opened first from the session's
/// own screen, so the back affordance shows as it would in the TUI.
pub fn handle(
    catalogue: &Catalogue,
    resources: &Resources,
    destination: Destination,
    selection: Option<(SessionType, Pillar)>,
    json: bool,
) -> Result<()> {
    let state = StateHolder::new();

    let router = match selection {
        Some((session, pillar)) => {
            let start = Destination::BOTTOM_BAR
                .into_iter()
                .find(|d| d.session_type() == Some(session))
                .unwrap_or_default();
            let mut router = Router::new(start);
            state.update_selected_destination(start);
            actions::open_pillar_events(&state, &mut router, catalogue.group(session), pillar);
            if destination.is_bottom_bar() {
                actions::select_destination(&state, &mut router, destination);
            } else if destination != Destination::Events {
                router.navigate(destination);
            }
            router
        }
        None => {
            if destination.is_bottom_bar() {
                state.update_selected_destination(destination);
            }
            Router::new(destination)
        }
    };

    let snapshot = state.read();
    let screen = present_screen(&ScreenContext {
        catalogue,
        resources,
        state: &snapshot,
        router: &router,
    });
    ConsoleRenderer::new(json).render(CommandResultViewModel::new(screen))
}
