// month1 core: the catalogue, the shared view state and navigation.
//
// Everything here is synchronous and allocation-light. The catalogue and
// string table are compiled in; the only mutable pieces are `StateHolder`
// and `Router`, both owned by the caller and passed explicitly.

pub mod actions;
pub mod catalogue;
pub mod filter;
pub mod resources;
pub mod router;
pub mod state;
pub mod validate;

pub use catalogue::Catalogue;
pub use filter::{filter_by_category, filter_by_category_name};
pub use resources::{Resources, labels};
pub use router::Router;
pub use state::{StateHolder, StateSubscription};
pub use validate::{ValidationPolicy, enforce, validate};

pub use month1_types as types;
