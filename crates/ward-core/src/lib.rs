//! Core domain types for the ward system.
//!
//! This crate contains the bed model, its lifecycle state machine, and the
//! registry that is the sole mutator of bed state.

pub mod bed;
pub mod duration;
pub mod enums;
pub mod error;
pub mod history;
pub mod id;
pub mod registry;

pub use bed::{Bed, BedState};
pub use enums::BedStatus;
pub use error::{RegistryError, Result};
pub use history::HistoryEntry;
pub use id::BedId;
pub use registry::BedRegistry;
