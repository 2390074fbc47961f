//! Registry error types.

use crate::enums::BedStatus;

/// Errors that can occur during registry operations.
///
/// All of these are recoverable: callers report the failure and continue
/// the interaction loop. A failing operation never leaves a bed half
/// mutated.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No bed with the given number.
    #[error("bed {id} not found")]
    NotFound {
        /// The bed number that was looked up.
        id: String,
    },

    /// `add` was called with a number already in use.
    #[error("bed {id} already exists")]
    AlreadyExists {
        /// The duplicate bed number.
        id: String,
    },

    /// The operation is not permitted from the bed's current status.
    #[error("bed {id} is {status}; operation not allowed from this status")]
    InvalidTransition {
        /// The bed number.
        id: String,
        /// The status the bed was in when the operation was attempted.
        status: BedStatus,
    },

    /// `remove` was called on an occupied bed.
    #[error("bed {id} is occupied and cannot be removed")]
    Conflict {
        /// The bed number.
        id: String,
    },

    /// The input could not be parsed as a bed number.
    #[error("invalid bed number {input:?}: expected digits only")]
    InvalidId {
        /// The rejected input.
        input: String,
    },

    /// An unrecognized search criterion was supplied.
    #[error("unknown search criterion {input:?}: expected by-id, by-status, or by-patient")]
    InvalidCriterion {
        /// The rejected input.
        input: String,
    },
}

/// Convenience alias used throughout the core crates.
pub type Result<T> = std::result::Result<T, RegistryError>;

impl RegistryError {
    // -- Constructors --------------------------------------------------------

    /// Creates a [`RegistryError::NotFound`] for the given bed number.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Creates a [`RegistryError::AlreadyExists`] for the given bed number.
    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists { id: id.into() }
    }

    /// Creates a [`RegistryError::InvalidTransition`] carrying the bed's
    /// current status.
    pub fn invalid_transition(id: impl Into<String>, status: BedStatus) -> Self {
        Self::InvalidTransition {
            id: id.into(),
            status,
        }
    }

    /// Creates a [`RegistryError::Conflict`] for the given bed number.
    pub fn conflict(id: impl Into<String>) -> Self {
        Self::Conflict { id: id.into() }
    }

    /// Creates a [`RegistryError::InvalidId`] for the rejected input.
    pub fn invalid_id(input: impl Into<String>) -> Self {
        Self::InvalidId {
            input: input.into(),
        }
    }

    /// Creates a [`RegistryError::InvalidCriterion`] for the rejected input.
    pub fn invalid_criterion(input: impl Into<String>) -> Self {
        Self::InvalidCriterion {
            input: input.into(),
        }
    }

    // -- Predicates ----------------------------------------------------------

    /// Returns `true` if this is a [`RegistryError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this is a [`RegistryError::InvalidTransition`].
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}
