//! The per-bed transition log.
//!
//! Each status transition appends exactly one entry; the log never shrinks
//! and is never reordered, so insertion order is chronological order.
//! Instead of one record with several optional fields, entries are a sum
//! type over the transition kinds, so the fields guaranteed for each kind
//! are explicit.

use chrono::{DateTime, Utc};

use crate::enums::BedStatus;

/// An immutable record of one status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEntry {
    /// A patient was placed in the bed.
    EnteredOccupancy {
        /// Status the bed transitioned from (`Available` or `Ready`).
        from: BedStatus,
        /// When the patient entered.
        at: DateTime<Utc>,
        /// The patient's name.
        patient: String,
    },

    /// The patient was released; the bed became `Ready`.
    LeftOccupancy {
        /// When the patient left.
        at: DateTime<Utc>,
        /// The patient's name.
        patient: String,
        /// Finalized dwell duration, formatted at release time.
        dwell: String,
    },

    /// Any transition not involving a patient (cleaning, maintenance).
    StatusChanged {
        /// Status the bed transitioned from.
        from: BedStatus,
        /// Status the bed transitioned to.
        to: BedStatus,
        /// When the transition happened.
        at: DateTime<Utc>,
    },
}

impl HistoryEntry {
    /// Returns the transition timestamp.
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Self::EnteredOccupancy { at, .. }
            | Self::LeftOccupancy { at, .. }
            | Self::StatusChanged { at, .. } => *at,
        }
    }

    /// Returns the status the bed held before this transition.
    pub fn previous_status(&self) -> BedStatus {
        match self {
            Self::EnteredOccupancy { from, .. } => *from,
            Self::LeftOccupancy { .. } => BedStatus::Occupied,
            Self::StatusChanged { from, .. } => *from,
        }
    }

    /// Returns the status the bed held after this transition.
    pub fn new_status(&self) -> BedStatus {
        match self {
            Self::EnteredOccupancy { .. } => BedStatus::Occupied,
            Self::LeftOccupancy { .. } => BedStatus::Ready,
            Self::StatusChanged { to, .. } => *to,
        }
    }

    /// Returns the patient involved, if this transition involved one.
    pub fn patient(&self) -> Option<&str> {
        match self {
            Self::EnteredOccupancy { patient, .. } | Self::LeftOccupancy { patient, .. } => {
                Some(patient)
            }
            Self::StatusChanged { .. } => None,
        }
    }

    /// Returns the finalized dwell duration, present only on
    /// [`HistoryEntry::LeftOccupancy`].
    pub fn dwell(&self) -> Option<&str> {
        match self {
            Self::LeftOccupancy { dwell, .. } => Some(dwell),
            _ => None,
        }
    }
}
