use anyhow::Result;
use month1_core::{Catalogue, Resources};
use month1_types::SessionType;

use crate::presentation::presenters::present_pillar_list;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(
    catalogue: &Catalogue,
    resources: &Resources,
    session: SessionType,
    json: bool,
) -> Result<()> {
    let result = present_pillar_list(catalogue.group(session), resources);
    ConsoleRenderer::new(json).render(result)
}
