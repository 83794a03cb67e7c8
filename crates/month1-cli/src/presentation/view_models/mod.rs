pub mod catalogue;
pub mod common;
pub mod result;
pub mod screen;

pub use catalogue::{EventListingViewModel, PillarListViewModel, ValidationViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel, ViewMode};
pub use result::CommandResultViewModel;
pub use screen::{
    AppBarViewModel, BigPictureViewModel, EventCardViewModel, EventListViewModel,
    NavBarViewModel, NavItemViewModel, PillarCardViewModel, PlaceholderViewModel, ScreenBody,
    ScreenViewModel, SessionScreenViewModel,
};

use std::fmt;

/// Bridge from a ViewModel to its text view
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
