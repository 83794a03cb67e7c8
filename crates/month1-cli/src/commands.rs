use std::time::Duration;

use anyhow::Result;
use is_terminal::IsTerminal;
use month1_core::{Catalogue, Resources, enforce};

use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::logging;
use crate::types::OutputFormat;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Tui { start: None });
    let interactive = matches!(command, Commands::Tui { .. }) && std::io::stdout().is_terminal();

    match config.log_file() {
        Some(path) if interactive => logging::init_file(cli.log_level, &path)?,
        _ => logging::init_stderr(cli.log_level),
    }

    let catalogue = Catalogue::builtin();
    let resources = Resources::builtin();
    let json = cli.format == OutputFormat::Json;

    // `validate` reports issues itself instead of failing at startup
    if !matches!(command, Commands::Validate) {
        enforce(catalogue, &resources, config.catalogue.validation)?;
    }

    match command {
        Commands::Tui { start } => {
            let start = start.map(Into::into).unwrap_or(config.ui.start_destination);
            if interactive {
                let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(10));
                handlers::tui::handle(catalogue, &resources, start, tick_rate)
            } else {
                tracing::debug!("stdout is not a terminal; printing the start screen");
                handlers::screen::handle(catalogue, &resources, start, None, json)
            }
        }

        Commands::Pillars { session } => {
            handlers::pillars::handle(catalogue, &resources, session.into(), json)
        }

        Commands::Events {
            session,
            pillar,
            style,
        } => handlers::events::handle(
            catalogue,
            &resources,
            session.into(),
            pillar,
            style.into(),
            json,
        ),

        Commands::Validate => handlers::validate::handle(catalogue, &resources, json),

        Commands::Screen {
            destination,
            session,
            pillar,
        } => {
            let selection = session.zip(pillar).map(|(s, p)| (s.into(), p));
            handlers::screen::handle(catalogue, &resources, destination.into(), selection, json)
        }
    }
}
