//! The bed status enumeration.
//!
//! Serialized as a snake_case string on the wire. Unlike free-form label
//! fields, the status set is closed: an unknown string is a parse error,
//! never a silent catch-all.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Current lifecycle state of a bed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BedStatus {
    /// Never used since registration, free for a patient.
    Available,
    /// A patient is currently in the bed.
    Occupied,
    /// Vacated and fit for the next patient.
    Ready,
    /// Being cleaned.
    Cleaning,
    /// Out of service for repairs.
    Maintenance,
}

/// Error returned when parsing an unknown status string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown bed status: {0:?}")]
pub struct ParseStatusError(pub String);

impl BedStatus {
    /// All statuses in display order.
    pub const ALL: [BedStatus; 5] = [
        Self::Available,
        Self::Occupied,
        Self::Ready,
        Self::Cleaning,
        Self::Maintenance,
    ];

    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Ready => "ready",
            Self::Cleaning => "cleaning",
            Self::Maintenance => "maintenance",
        }
    }

    /// Returns `true` if a patient can be placed in a bed with this status.
    pub fn accepts_patient(&self) -> bool {
        matches!(self, Self::Available | Self::Ready)
    }
}

impl Default for BedStatus {
    fn default() -> Self {
        Self::Available
    }
}

impl fmt::Display for BedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BedStatus {
    type Err = ParseStatusError;

    /// Case-insensitive parse of the wire/display form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            "ready" => Ok(Self::Ready),
            "cleaning" => Ok(Self::Cleaning),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(ParseStatusError(s.to_owned())),
        }
    }
}

impl Serialize for BedStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BedStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::unknown_variant(
                &s,
                &["available", "occupied", "ready", "cleaning", "maintenance"],
            )
        })
    }
}
