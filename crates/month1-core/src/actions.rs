//! User actions that touch both the shared state and the router.

use month1_types::{Destination, Pillar, SessionGroup};

use crate::filter::filter_by_category;
use crate::{Router, StateHolder};

/// Bottom navigation bar selection
pub fn select_destination(state: &StateHolder, router: &mut Router, destination: Destination) {
    router.navigate(destination);
    state.update_selected_destination(destination);
}

/// Put the pillar's events into the shared state and show the Events screen.
///
/// Returns the number of events selected; zero is not an error.
pub fn open_pillar_events(
    state: &StateHolder,
    router: &mut Router,
    group: &SessionGroup,
    pillar: Pillar,
) -> usize {
    let events = filter_by_category(group.events, pillar);
    let count = events.len();
    tracing::info!(session = %group.session_type, %pillar, count, "opening pillar events");

    state.update_events(events);
    router.navigate(Destination::Events);
    count
}

/// Back navigation. The highlighted bottom bar item follows the screen
/// whenever the screen returned to is itself a bottom bar destination.
pub fn go_back(state: &StateHolder, router: &mut Router) -> bool {
    if !router.navigate_back() {
        return false;
    }

    let current = router.current();
    if current.is_bottom_bar() {
        state.update_selected_destination(current);
    }
    true
}
