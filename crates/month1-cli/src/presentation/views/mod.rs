pub mod catalogue;
pub mod screen;
pub mod tui;
