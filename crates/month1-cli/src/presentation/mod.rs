//! # Presentation Layer
//!
//! Everything the user sees, for both the one-shot console commands and the
//! interactive TUI. The layer follows an adaptation of **MVVM** with
//! component-owned UI state for the TUI.
//!
//! ## Data Flow
//!
//! ### Console (text / JSON)
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                                                                  ==(Text)==> [ View ] --> stdout
//! ```
//!
//! ### Interactive TUI
//!
//! ```text
//! [ StateHolder ] --(subscription)--> [ TuiApp (Router) ] --> [ Presenter ] --> [ ScreenViewModel ]
//!        ^                                   |                                        |
//!        |                                   v                                        v
//!   month1_core::actions  <--Action--  [ Component ] <-- key input             [ View widgets ]
//! ```
//!
//! ## Rules
//!
//! 1. **ViewModels hold raw data.** Counts stay numbers, pillars stay enums.
//!    `--format json` always dumps the full ViewModel and ignores `ViewMode`.
//! 2. **Presenters are pure.** They turn catalogue, state and router into
//!    ViewModels and never format for display.
//! 3. **Views only lay out.** `fmt::Display` for text, Ratatui `Widget` for
//!    the TUI. `formatters` is used here and nowhere else.
//! 4. **Components own UI state** (cursor, scroll, expanded cards) and clamp
//!    it against the data before each render.
//! 5. **The renderer routes.** It delegates keys to the component of the
//!    current screen and turns returned actions into calls on
//!    `month1_core::actions`. It never mutates the state directly.
//!
//! ## Where does code go?
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Count events, decide when to show a tip | `presenters/` |
//! | Change a color or hide something in compact mode | `views/` |
//! | Wrap or pluralize text | `formatters` |
//! | Handle a key on one screen | `views/tui/components/` |
//! | Add a destination | `presenters/screen.rs` route table + `renderers/tui.rs` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
