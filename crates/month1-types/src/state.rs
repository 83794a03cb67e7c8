use serde::Serialize;

use crate::{Destination, EventSessionItem};

/// Shared view state read by every screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppState {
    /// Events selected for the Events screen
    pub current_events: Vec<EventSessionItem>,
    /// Highlighted bottom navigation item
    pub selected_destination: Destination,
}
