//! Terminal detection and styling for `ward` CLI output.

pub mod styles;
pub mod terminal;
