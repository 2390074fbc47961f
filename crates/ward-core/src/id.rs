//! Bed identifiers.
//!
//! A bed number is entered and displayed as a string but ordered
//! numerically, so that bed "10" sorts after bed "2". [`BedId`] carries the
//! trimmed display string together with its derived numeric sort key,
//! validated once at construction -- downstream code never re-parses.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::RegistryError;

/// A validated bed number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BedId {
    display: String,
    key: u64,
}

impl BedId {
    /// Parses a bed number from user input.
    ///
    /// The input is trimmed and must be a non-empty run of ASCII digits.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidId`] for empty, non-numeric, or
    /// overflowing input.
    pub fn parse(input: &str) -> Result<Self, RegistryError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RegistryError::invalid_id(input));
        }
        let key = trimmed
            .parse::<u64>()
            .map_err(|_| RegistryError::invalid_id(input))?;
        Ok(Self {
            display: trimmed.to_owned(),
            key,
        })
    }

    /// Returns the display form of the bed number.
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Returns the numeric sort key.
    pub fn sort_key(&self) -> u64 {
        self.key
    }
}

impl Ord for BedId {
    fn cmp(&self, other: &Self) -> Ordering {
        // Numeric first; display breaks ties between forms like "7" and "07".
        self.key
            .cmp(&other.key)
            .then_with(|| self.display.cmp(&other.display))
    }
}

impl PartialOrd for BedId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl FromStr for BedId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for BedId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}

impl<'de> Deserialize<'de> for BedId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_keeps_display() {
        let id = BedId::parse(" 12 ").unwrap();
        assert_eq!(id.as_str(), "12");
        assert_eq!(id.sort_key(), 12);
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert!(BedId::parse("").is_err());
        assert!(BedId::parse("  ").is_err());
        assert!(BedId::parse("A3").is_err());
        assert!(BedId::parse("1.5").is_err());
        assert!(BedId::parse("-1").is_err());
    }

    #[test]
    fn parse_rejects_overflow() {
        assert!(BedId::parse("99999999999999999999999999").is_err());
    }

    #[test]
    fn orders_numerically_not_lexically() {
        let two = BedId::parse("2").unwrap();
        let ten = BedId::parse("10").unwrap();
        assert!(two < ten);
    }

    #[test]
    fn leading_zero_is_a_distinct_id() {
        let a = BedId::parse("7").unwrap();
        let b = BedId::parse("07").unwrap();
        assert_ne!(a, b);
        assert_eq!(a.sort_key(), b.sort_key());
    }

    #[test]
    fn serde_roundtrip_as_string() {
        let id = BedId::parse("42").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""42""#);
        let back: BedId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn deserialize_rejects_malformed() {
        let result: Result<BedId, _> = serde_json::from_str(r#""ward-1""#);
        assert!(result.is_err());
    }
}
