// month1 is a terminal journal for the first month of a mentoring programme.
//
// The catalogue (pillars, event sessions, display text) is compiled in and
// validated once at startup. Navigation and the selected events live in a
// single StateHolder that is passed by reference to the TUI; nothing is
// persisted. Console subcommands print the same view models the TUI draws.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
