pub mod events;
pub mod pillars;
pub mod screen;
pub mod tui;
pub mod validate;
