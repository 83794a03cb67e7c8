use anyhow::Result;
use month1_core::{Catalogue, Resources};
use month1_types::{Pillar, SessionType};

use crate::presentation::presenters::present_event_listing;
use crate::presentation::view_models::ViewMode;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(
    catalogue: &Catalogue,
    resources: &Resources,
    session: SessionType,
    pillar: Option<Pillar>,
    mode: ViewMode,
    json: bool,
) -> Result<()> {
    let group = catalogue.group(session);
    if let Some(pillar) = pillar {
        if group.pillar(pillar).is_none() {
            tracing::warn!(%session, %pillar, "pillar is not part of this session");
        }
    }

    let result = present_event_listing(group, pillar, resources);
    ConsoleRenderer::new(json).with_mode(mode).render(result)
}
