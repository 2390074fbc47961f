//! Wire records for the bed file.
//!
//! Field names match the original paper system's vocabulary and must not
//! change: `numero`, `paciente`, `entrada_ocupacao`, `historico`,
//! `status_anterior`, `novo_status`, `tempo_permanencia`. Optional fields
//! are omitted when absent, so vacant beds serialize compactly.
//!
//! Conversion back into core types re-checks the occupancy invariant: a
//! record claiming `occupied` without a patient and entry timestamp (or a
//! vacant record carrying them) is corrupt and rejected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ward_core::{Bed, BedId, BedState, BedStatus, HistoryEntry};

use crate::error::{Result, StoreError};

/// One bed as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedRecord {
    /// Bed number.
    pub numero: String,
    /// Current status.
    pub status: BedStatus,
    /// Current patient; present iff status is `occupied`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paciente: Option<String>,
    /// When the current occupancy began; present iff status is `occupied`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrada_ocupacao: Option<DateTime<Utc>>,
    /// Transition log, oldest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub historico: Vec<HistoryRecord>,
}

/// One transition as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Status before the transition.
    pub status_anterior: BedStatus,
    /// Status after the transition.
    pub novo_status: BedStatus,
    /// When the transition happened.
    pub timestamp: DateTime<Utc>,
    /// Patient involved, for occupancy transitions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paciente: Option<String>,
    /// Finalized dwell duration, only on a release.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo_permanencia: Option<String>,
}

impl From<&Bed> for BedRecord {
    fn from(bed: &Bed) -> Self {
        Self {
            numero: bed.id().to_string(),
            status: bed.status(),
            paciente: bed.state().patient().map(str::to_owned),
            entrada_ocupacao: bed.state().occupied_since(),
            historico: bed.history().iter().map(HistoryRecord::from).collect(),
        }
    }
}

impl From<&HistoryEntry> for HistoryRecord {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            status_anterior: entry.previous_status(),
            novo_status: entry.new_status(),
            timestamp: entry.at(),
            paciente: entry.patient().map(str::to_owned),
            tempo_permanencia: entry.dwell().map(str::to_owned),
        }
    }
}

impl BedRecord {
    /// Converts the record back into a core bed.
    pub fn into_bed(self) -> Result<Bed> {
        let id = BedId::parse(&self.numero)?;
        let state = match self.status {
            BedStatus::Occupied => {
                let patient = self.paciente.ok_or_else(|| {
                    StoreError::corrupt(&self.numero, "occupied without a patient")
                })?;
                let since = self.entrada_ocupacao.ok_or_else(|| {
                    StoreError::corrupt(&self.numero, "occupied without an entry timestamp")
                })?;
                BedState::Occupied { patient, since }
            }
            status => {
                if self.paciente.is_some() || self.entrada_ocupacao.is_some() {
                    return Err(StoreError::corrupt(
                        &self.numero,
                        "patient data on a vacant bed",
                    ));
                }
                match status {
                    BedStatus::Available => BedState::Available,
                    BedStatus::Ready => BedState::Ready,
                    BedStatus::Cleaning => BedState::Cleaning,
                    BedStatus::Maintenance => BedState::Maintenance,
                    BedStatus::Occupied => unreachable!("handled above"),
                }
            }
        };
        let history = self
            .historico
            .into_iter()
            .map(|r| r.into_entry(&self.numero))
            .collect::<Result<Vec<_>>>()?;
        Ok(Bed::restore(id, state, history))
    }
}

impl HistoryRecord {
    /// Converts the record back into a core history entry.
    ///
    /// `bed` is only used for error reporting.
    pub fn into_entry(self, bed: &str) -> Result<HistoryEntry> {
        if let Some(dwell) = self.tempo_permanencia {
            let patient = self
                .paciente
                .ok_or_else(|| StoreError::corrupt(bed, "release entry without a patient"))?;
            return Ok(HistoryEntry::LeftOccupancy {
                at: self.timestamp,
                patient,
                dwell,
            });
        }
        if self.novo_status == BedStatus::Occupied {
            let patient = self
                .paciente
                .ok_or_else(|| StoreError::corrupt(bed, "occupancy entry without a patient"))?;
            return Ok(HistoryEntry::EnteredOccupancy {
                from: self.status_anterior,
                at: self.timestamp,
                patient,
            });
        }
        if self.paciente.is_some() {
            return Err(StoreError::corrupt(
                bed,
                "patient on a non-occupancy transition",
            ));
        }
        Ok(HistoryEntry::StatusChanged {
            from: self.status_anterior,
            to: self.novo_status,
            at: self.timestamp,
        })
    }
}
