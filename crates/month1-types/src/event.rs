use serde::Serialize;

use crate::{Pillar, ResourceId};

/// A single recorded session with its notes.
///
/// `takeaways` holds two key points learnt during the event,
/// `application_notes` two notes on how they will be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventSessionItem {
    pub title: ResourceId,
    pub takeaways: ResourceId,
    pub application_notes: ResourceId,
    pub category: Pillar,
}

impl EventSessionItem {
    pub const fn new(
        title: ResourceId,
        takeaways: ResourceId,
        application_notes: ResourceId,
        category: Pillar,
    ) -> Self {
        Self {
            title,
            takeaways,
            application_notes,
            category,
        }
    }

    /// Every resource this event refers to
    pub fn resources(&self) -> [ResourceId; 3] {
        [self.title, self.takeaways, self.application_notes]
    }
}
