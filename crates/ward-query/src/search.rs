//! Bed search.
//!
//! Three criteria, all matching against the *current* state of a bed.
//! History is never searched. An unknown criterion name is a caller
//! error; an unknown status *value* under `by-status` simply matches
//! nothing, since the criterion itself was recognized.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use ward_core::{BedId, BedRegistry, BedStatus, RegistryError, Result};

use crate::views::BedRow;

/// What a search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCriterion {
    /// Exact match on the normalized bed number.
    ById,
    /// Exact, case-insensitive match on the status name.
    ByStatus,
    /// Case-insensitive substring match on the current patient's name.
    ByPatient,
}

impl SearchCriterion {
    /// Returns the CLI name of the criterion.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ById => "by-id",
            Self::ByStatus => "by-status",
            Self::ByPatient => "by-patient",
        }
    }
}

impl fmt::Display for SearchCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchCriterion {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "by-id" | "id" => Ok(Self::ById),
            "by-status" | "status" => Ok(Self::ByStatus),
            "by-patient" | "patient" => Ok(Self::ByPatient),
            _ => Err(RegistryError::invalid_criterion(s)),
        }
    }
}

/// Searches the registry, returning matching rows ascending by bed number.
///
/// # Errors
///
/// `by-id` with a non-numeric value fails with
/// [`RegistryError::InvalidId`]; no criterion fails on an unmatched value.
pub fn search(
    registry: &BedRegistry,
    criterion: SearchCriterion,
    value: &str,
    now: DateTime<Utc>,
) -> Result<Vec<BedRow>> {
    match criterion {
        SearchCriterion::ById => {
            let id = BedId::parse(value)?;
            Ok(registry
                .find(&id)
                .map(|b| vec![BedRow::from_bed(b, now)])
                .unwrap_or_default())
        }
        SearchCriterion::ByStatus => {
            // Unknown status text is not an error here.
            let Ok(status) = value.parse::<BedStatus>() else {
                return Ok(Vec::new());
            };
            Ok(registry
                .beds()
                .iter()
                .filter(|b| b.status() == status)
                .map(|b| BedRow::from_bed(b, now))
                .collect())
        }
        SearchCriterion::ByPatient => {
            let needle = value.trim().to_lowercase();
            Ok(registry
                .beds()
                .iter()
                .filter(|b| {
                    b.state()
                        .patient()
                        .is_some_and(|p| p.to_lowercase().contains(&needle))
                })
                .map(|b| BedRow::from_bed(b, now))
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> BedId {
        BedId::parse(s).unwrap()
    }

    fn sample() -> (BedRegistry, DateTime<Utc>) {
        let mut reg = BedRegistry::new();
        for n in ["1", "2", "3"] {
            reg.add(id(n)).unwrap();
        }
        let t0: DateTime<Utc> = "2026-08-20T08:00:00Z".parse().unwrap();
        reg.occupy_at(&id("1"), "Ana Silva", t0).unwrap();
        reg.occupy_at(&id("3"), "Jorge Santos", t0).unwrap();
        (reg, t0)
    }

    #[test]
    fn criterion_parse_accepts_both_spellings() {
        assert_eq!(
            "by-patient".parse::<SearchCriterion>().unwrap(),
            SearchCriterion::ByPatient
        );
        assert_eq!(
            "STATUS".parse::<SearchCriterion>().unwrap(),
            SearchCriterion::ByStatus
        );
        let err = "by-ward".parse::<SearchCriterion>().unwrap_err();
        assert!(matches!(err, RegistryError::InvalidCriterion { .. }));
    }

    #[test]
    fn by_id_finds_exactly_one_bed() {
        let (reg, t0) = sample();
        let rows = search(&reg, SearchCriterion::ById, " 2 ", t0).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "2");

        assert!(search(&reg, SearchCriterion::ById, "99", t0)
            .unwrap()
            .is_empty());
        assert!(search(&reg, SearchCriterion::ById, "abc", t0).is_err());
    }

    #[test]
    fn by_status_matches_case_insensitively() {
        let (reg, t0) = sample();
        let rows = search(&reg, SearchCriterion::ByStatus, "Occupied", t0).unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn by_status_with_unknown_value_matches_nothing() {
        let (reg, t0) = sample();
        let rows = search(&reg, SearchCriterion::ByStatus, "levitating", t0).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn by_patient_is_substring_and_case_insensitive() {
        let (reg, t0) = sample();
        let rows = search(&reg, SearchCriterion::ByPatient, "ana", t0).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].patient.as_deref(), Some("Ana Silva"));
    }

    #[test]
    fn by_patient_never_matches_vacant_beds() {
        let (mut reg, t0) = sample();
        reg.release_at(&id("1"), t0).unwrap();
        // Bed 1's history still mentions Ana, but she is no longer in it.
        let rows = search(&reg, SearchCriterion::ByPatient, "ana", t0).unwrap();
        assert!(rows.is_empty());
    }
}
