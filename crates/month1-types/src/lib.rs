pub mod destination;
pub mod error;
pub mod event;
pub mod pillar;
pub mod resource;
pub mod session;
pub mod state;

pub use destination::Destination;
pub use error::{CatalogueIssue, Error, Result};
pub use event::EventSessionItem;
pub use pillar::{Pillar, PillarItem};
pub use resource::ResourceId;
pub use session::{SessionGroup, SessionType};
pub use state::AppState;
