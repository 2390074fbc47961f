//! The bed entity.
//!
//! A bed's live state is a sum type: the patient name and occupancy start
//! only exist on the `Occupied` variant, so a vacated bed cannot carry
//! stale patient data by construction.

use chrono::{DateTime, Utc};

use crate::enums::BedStatus;
use crate::history::HistoryEntry;
use crate::id::BedId;

/// The live state of a bed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BedState {
    /// Never used since registration.
    Available,
    /// A patient is in the bed.
    Occupied {
        /// The patient's name.
        patient: String,
        /// When the occupancy began.
        since: DateTime<Utc>,
    },
    /// Vacated and fit for the next patient.
    Ready,
    /// Being cleaned.
    Cleaning,
    /// Out of service for repairs.
    Maintenance,
}

impl BedState {
    /// Projects the state onto the status enumeration.
    pub fn status(&self) -> BedStatus {
        match self {
            Self::Available => BedStatus::Available,
            Self::Occupied { .. } => BedStatus::Occupied,
            Self::Ready => BedStatus::Ready,
            Self::Cleaning => BedStatus::Cleaning,
            Self::Maintenance => BedStatus::Maintenance,
        }
    }

    /// Returns the current patient, if any.
    pub fn patient(&self) -> Option<&str> {
        match self {
            Self::Occupied { patient, .. } => Some(patient),
            _ => None,
        }
    }

    /// Returns when the current occupancy began, if occupied.
    pub fn occupied_since(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Occupied { since, .. } => Some(*since),
            _ => None,
        }
    }

    /// Returns `true` if a patient is in the bed.
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied { .. })
    }
}

/// A trackable bed with its transition log.
///
/// Beds are created and mutated only through
/// [`BedRegistry`](crate::registry::BedRegistry) operations; the fields are
/// private so no caller can bypass the lifecycle state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bed {
    pub(crate) id: BedId,
    pub(crate) state: BedState,
    pub(crate) history: Vec<HistoryEntry>,
}

impl Bed {
    /// Creates a freshly registered bed: `Available`, empty history.
    pub fn new(id: BedId) -> Self {
        Self {
            id,
            state: BedState::Available,
            history: Vec::new(),
        }
    }

    /// Rebuilds a bed from persisted state.
    ///
    /// Intended for the storage layer; the registry's invariants are
    /// assumed to hold for the supplied data.
    pub fn restore(id: BedId, state: BedState, history: Vec<HistoryEntry>) -> Self {
        Self { id, state, history }
    }

    /// Returns the bed number.
    pub fn id(&self) -> &BedId {
        &self.id
    }

    /// Returns the live state.
    pub fn state(&self) -> &BedState {
        &self.state
    }

    /// Returns the current status.
    pub fn status(&self) -> BedStatus {
        self.state.status()
    }

    /// Returns the transition log, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
}
