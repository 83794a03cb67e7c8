use month1_types::{Pillar, SessionType};
use serde::Serialize;

use super::screen::{EventCardViewModel, PillarCardViewModel};

#[derive(Debug, Serialize)]
pub struct PillarListViewModel {
    pub session_type: SessionType,
    pub pillars: Vec<PillarCardViewModel>,
}

#[derive(Debug, Serialize)]
pub struct EventListingViewModel {
    pub session_type: SessionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pillar: Option<Pillar>,
    pub events: Vec<EventCardViewModel>,
}

#[derive(Debug, Serialize)]
pub struct ValidationViewModel {
    pub passed: bool,
    pub pillar_count: usize,
    pub event_count: usize,
    pub issues: Vec<String>,
}
