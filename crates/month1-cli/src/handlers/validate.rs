use anyhow::{Result, bail};
use month1_core::{Catalogue, Resources, validate};

use crate::presentation::presenters::present_validation;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(catalogue: &Catalogue, resources: &Resources, json: bool) -> Result<()> {
    let issues = validate(catalogue, resources);
    for issue in &issues {
        tracing::debug!(%issue, "catalogue issue");
    }

    let result = present_validation(catalogue, &issues);
    let failed = result.is_error();
    ConsoleRenderer::new(json).render(result)?;

    if failed {
        bail!("catalogue validation failed with {} issue(s)", issues.len());
    }
    Ok(())
}
