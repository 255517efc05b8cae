//! Floating window management for a single-page desktop shell.
//!
//! [`window::WindowManager`] owns the open windows: their geometry, stacking
//! order and workspace membership, plus the one pointer session (move or
//! resize) that may be in flight. Hosts feed it pointer events and read back
//! geometry; [`runner`] is a terminal host built on ratatui.

pub mod apps;
pub mod config;
pub mod constants;
pub mod drivers;
pub mod event_loop;
pub mod events;
pub mod keybindings;
pub mod layout;
pub mod runner;
pub mod tracing_sub;
pub mod ui;
pub mod window;
