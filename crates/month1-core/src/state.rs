//! Shared view state.
//!
//! [`StateHolder`] is the single writer. It is created once at startup and
//! handed by reference to whoever needs to read or mutate it. Readers either
//! take a snapshot with [`StateHolder::read`] or hold a [`StateSubscription`]
//! to be told when the state changed. Last write wins.

use month1_types::{AppState, Destination, EventSessionItem};
use tokio::sync::watch;

pub struct StateHolder {
    tx: watch::Sender<AppState>,
}

impl StateHolder {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(initial: AppState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Replace the selected events wholesale
    pub fn update_events(&self, events: Vec<EventSessionItem>) {
        tracing::debug!(count = events.len(), "updating current events");
        self.tx.send_modify(|state| state.current_events = events);
    }

    pub fn update_selected_destination(&self, destination: Destination) {
        tracing::debug!(%destination, "updating selected destination");
        self.tx
            .send_modify(|state| state.selected_destination = destination);
    }

    /// Snapshot of the current state
    pub fn read(&self) -> AppState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> StateSubscription {
        StateSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for StateHolder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only handle that observes state changes
pub struct StateSubscription {
    rx: watch::Receiver<AppState>,
}

impl StateSubscription {
    /// True when an update arrived since the last [`Self::current`]
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Latest state; marks it as seen
    pub fn current(&mut self) -> AppState {
        self.rx.borrow_and_update().clone()
    }
}
