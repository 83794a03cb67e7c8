//! TUI View Components and Stateful Components
//!
//! This module contains:
//! 1. **Views**: Stateless Ratatui widgets built from a ViewModel reference
//!    (app bar, nav bar, big picture, pillar list, event list)
//! 2. **Components**: Stateful components that own UI state (cursor, scroll,
//!    expanded pillars), handle keyboard input and emit actions upward
//!
//! Components never touch the shared state or the router; they return an
//! action and the renderer applies it.

pub mod app_bar;
pub mod components;
pub mod events;
pub mod nav_bar;
pub mod session;

pub use app_bar::AppBarView;
pub use components::{EventsComponent, SessionAction, SessionComponent};
pub use events::{EventListView, PlaceholderView};
pub use nav_bar::NavBarView;
pub use session::{BigPictureView, PillarListView};
