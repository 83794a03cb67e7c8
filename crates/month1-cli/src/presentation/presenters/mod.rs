pub mod catalogue;
pub mod screen;

pub use catalogue::{present_event_listing, present_pillar_list, present_validation};
pub use screen::{ScreenContext, present_events, present_screen, present_session};
