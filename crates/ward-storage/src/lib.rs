//! JSON persistence for the bed registry.
//!
//! The on-disk format is one pretty-printed JSON array of bed records,
//! carrying the field names of the original paper system (`numero`,
//! `paciente`, `historico`, ...). The wire records are separate types
//! from the core model, so the file format cannot drift when the domain
//! types change shape.

pub mod error;
pub mod record;
pub mod store;

pub use error::{Result, StoreError};
pub use record::{BedRecord, HistoryRecord};
pub use store::JsonStore;
