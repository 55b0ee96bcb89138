//! Reusable UI components

pub mod authorization;
pub mod confirm;
pub mod notification;
pub mod status_bar;
