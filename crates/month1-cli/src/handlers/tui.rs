use std::time::Duration;

use anyhow::Result;
use month1_core::{Catalogue, Resources, StateHolder};
use month1_types::Destination;

use crate::presentation::renderers::{TuiApp, TuiRenderer};

pub fn handle(
    catalogue: &Catalogue,
    resources: &Resources,
    start: Destination,
    tick_rate: Duration,
) -> Result<()> {
    let state = StateHolder::new();
    let app = TuiApp::new(catalogue, resources, &state, start);
    TuiRenderer::new(tick_rate).run(app)
}
