pub mod events;
pub mod session;

pub use events::EventsComponent;
pub use session::{SessionAction, SessionComponent};
