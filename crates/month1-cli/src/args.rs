use crate::types::{DestinationArg, LogLevel, OutputFormat, SessionArg, ViewStyle};
use clap::{Parser, Subcommand};
use month1_types::Pillar;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "month1")]
#[command(about = "Browse Month 1 pillars and event sessions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $MONTH1_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive journal
    Tui {
        /// Screen to open first (overrides ui.start_destination)
        #[arg(long)]
        start: Option<DestinationArg>,
    },

    /// List the pillars of a session type
    Pillars {
        #[arg(long, default_value = "theory")]
        session: SessionArg,
    },

    /// List the events of a session type
    Events {
        #[arg(long, default_value = "theory")]
        session: SessionArg,

        /// Only events under this pillar (display name or kebab-case id)
        #[arg(long)]
        pillar: Option<Pillar>,

        #[arg(long, default_value = "standard")]
        style: ViewStyle,
    },

    /// Check that every event belongs to a pillar of its session
    Validate,

    /// Print the contents of one screen without opening the TUI
    Screen {
        destination: DestinationArg,

        /// Session whose pillar events are selected before rendering
        #[arg(long, requires = "pillar")]
        session: Option<SessionArg>,

        /// Pillar whose events are selected before rendering
        #[arg(long, requires = "session")]
        pillar: Option<Pillar>,
    },
}
