//! Screen implementations

pub mod conference;
pub mod help;
