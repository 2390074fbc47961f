//! Read-only queries over the bed registry.
//!
//! Nothing in this crate mutates a registry, and nothing reads the wall
//! clock: every query that needs an instant takes it as an argument, so
//! results are deterministic under test.

pub mod search;
pub mod views;

pub use search::{SearchCriterion, search};
pub use views::{BedHistoryView, BedRow, HistoryRow, list_all, list_history, list_occupied};
