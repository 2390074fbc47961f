//! Flattened view models for listings.
//!
//! The core types keep occupancy data inside the `Occupied` variant; the
//! views flatten that into plain rows with optional fields, which is what
//! both the table renderer and `--json` output want.

use chrono::{DateTime, Utc};
use serde::Serialize;

use ward_core::duration::format_elapsed;
use ward_core::{Bed, BedRegistry, BedStatus, HistoryEntry};

/// One bed in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BedRow {
    /// Bed number.
    pub id: String,
    /// Current status.
    pub status: BedStatus,
    /// Current patient, present only while occupied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<String>,
    /// When the current occupancy began, present only while occupied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupied_since: Option<DateTime<Utc>>,
    /// Live elapsed occupancy (`{h}h {m}min`), present only while occupied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<String>,
}

impl BedRow {
    /// Projects one bed onto a row, computing the live elapsed time
    /// against `now`.
    pub fn from_bed(bed: &Bed, now: DateTime<Utc>) -> Self {
        let since = bed.state().occupied_since();
        Self {
            id: bed.id().to_string(),
            status: bed.status(),
            patient: bed.state().patient().map(str::to_owned),
            occupied_since: since,
            elapsed: since.map(|s| format_elapsed(now - s)),
        }
    }
}

/// One transition in a bed's history listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    /// When the transition happened.
    pub at: DateTime<Utc>,
    /// Status before the transition.
    pub from: BedStatus,
    /// Status after the transition.
    pub to: BedStatus,
    /// Patient involved, when the transition involved one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<String>,
    /// Finalized dwell duration, present only on a release.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dwell: Option<String>,
}

impl From<&HistoryEntry> for HistoryRow {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            at: entry.at(),
            from: entry.previous_status(),
            to: entry.new_status(),
            patient: entry.patient().map(str::to_owned),
            dwell: entry.dwell().map(str::to_owned),
        }
    }
}

/// One bed with its full transition log, oldest entry first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BedHistoryView {
    /// Bed number.
    pub id: String,
    /// Current status.
    pub status: BedStatus,
    /// Ordered transitions.
    pub history: Vec<HistoryRow>,
}

impl BedHistoryView {
    /// Projects one bed onto its history view.
    pub fn from_bed(bed: &Bed) -> Self {
        Self {
            id: bed.id().to_string(),
            status: bed.status(),
            history: bed.history().iter().map(HistoryRow::from).collect(),
        }
    }
}

/// Lists every bed, ascending by number.
pub fn list_all(registry: &BedRegistry, now: DateTime<Utc>) -> Vec<BedRow> {
    registry
        .beds()
        .iter()
        .map(|b| BedRow::from_bed(b, now))
        .collect()
}

/// Lists only the occupied beds, ascending by number.
///
/// An empty result means no bed is occupied; the display layer renders
/// the explicit indicator.
pub fn list_occupied(registry: &BedRegistry, now: DateTime<Utc>) -> Vec<BedRow> {
    registry
        .beds()
        .iter()
        .filter(|b| b.state().is_occupied())
        .map(|b| BedRow::from_bed(b, now))
        .collect()
}

/// Lists every bed's transition log, ascending by number.
pub fn list_history(registry: &BedRegistry) -> Vec<BedHistoryView> {
    registry.beds().iter().map(BedHistoryView::from_bed).collect()
}
