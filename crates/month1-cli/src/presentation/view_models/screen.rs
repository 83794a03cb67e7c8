//! Screen ViewModels
//!
//! Complete data contract for one frame of the interactive journal and for
//! `month1 screen`. Text is already resolved from the resource table; no
//! layout or styling decisions live here.

use month1_types::{Destination, Pillar, SessionType};
use serde::Serialize;

/// Everything needed to draw one screen
#[derive(Debug, Clone, Serialize)]
pub struct ScreenViewModel {
    pub destination: Destination,
    pub app_bar: AppBarViewModel,
    pub body: ScreenBody,
    pub nav_bar: NavBarViewModel,
}

/// Top bar: screen title and back affordance
#[derive(Debug, Clone, Serialize)]
pub struct AppBarViewModel {
    pub title: String,
    pub can_navigate_back: bool,
    pub back_label: String,
}

/// Bottom navigation bar
#[derive(Debug, Clone, Serialize)]
pub struct NavBarViewModel {
    pub items: Vec<NavItemViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItemViewModel {
    pub destination: Destination,
    pub label: String,
    pub icon: String,
    pub shortcut: char,
    pub is_selected: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScreenBody {
    Session(SessionScreenViewModel),
    Events(EventListViewModel),
    Placeholder(PlaceholderViewModel),
}

/// Session screen: big picture card followed by one card per pillar
#[derive(Debug, Clone, Serialize)]
pub struct SessionScreenViewModel {
    pub session_type: SessionType,
    pub big_picture: BigPictureViewModel,
    pub pillars: Vec<PillarCardViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BigPictureViewModel {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PillarCardViewModel {
    pub pillar: Pillar,
    pub name: String,
    pub description: String,
    pub event_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventListViewModel {
    pub events: Vec<EventCardViewModel>,
    /// Shown instead of the list when `events` is empty
    pub empty_message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventCardViewModel {
    pub category: Pillar,
    pub title: String,
    pub takeaways_label: String,
    pub takeaways: String,
    pub apply_label: String,
    pub application_notes: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaceholderViewModel {
    pub message: String,
}
