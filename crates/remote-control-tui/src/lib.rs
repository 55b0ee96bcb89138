//! Remote Control TUI Library
//!
//! Terminal client components that ask the local user whether another
//! conference participant may control their desktop.

pub mod app;
pub mod cli;
pub mod ui;

pub use app::App;
