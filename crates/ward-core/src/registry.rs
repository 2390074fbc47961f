//! The bed registry -- sole mutator of bed state.
//!
//! The registry owns the bed collection and enforces the lifecycle
//! transition table. Beds are kept sorted by ascending numeric bed number
//! regardless of insertion order, so every listing is already in display
//! order.
//!
//! Each mutating operation has an `_at` variant taking an explicit
//! timestamp; the plain form reads the wall clock. Queries compute elapsed
//! times on demand -- nothing here runs in the background.

use chrono::{DateTime, Utc};

use crate::bed::{Bed, BedState};
use crate::duration::format_dwell;
use crate::enums::BedStatus;
use crate::error::{RegistryError, Result};
use crate::history::HistoryEntry;
use crate::id::BedId;

/// The collection of beds for one ward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BedRegistry {
    beds: Vec<Bed>,
}

impl BedRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a registry from persisted beds.
    ///
    /// The beds are re-sorted into numeric order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyExists`] if two beds share a number.
    pub fn from_beds(mut beds: Vec<Bed>) -> Result<Self> {
        beds.sort_by(|a, b| a.id.cmp(&b.id));
        for pair in beds.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(RegistryError::already_exists(pair[0].id.as_str()));
            }
        }
        Ok(Self { beds })
    }

    /// Returns the beds in ascending numeric order.
    pub fn beds(&self) -> &[Bed] {
        &self.beds
    }

    /// Returns the number of registered beds.
    pub fn len(&self) -> usize {
        self.beds.len()
    }

    /// Returns `true` if no beds are registered.
    pub fn is_empty(&self) -> bool {
        self.beds.is_empty()
    }

    /// Looks up a bed by number.
    pub fn find(&self, id: &BedId) -> Option<&Bed> {
        self.index_of(id).map(|i| &self.beds[i])
    }

    /// Looks up a bed by number, failing with [`RegistryError::NotFound`].
    pub fn get(&self, id: &BedId) -> Result<&Bed> {
        self.find(id)
            .ok_or_else(|| RegistryError::not_found(id.as_str()))
    }

    // -- Mutations -----------------------------------------------------------

    /// Registers a new bed: status `Available`, empty history.
    pub fn add(&mut self, id: BedId) -> Result<&Bed> {
        match self.beds.binary_search_by(|b| b.id.cmp(&id)) {
            Ok(_) => Err(RegistryError::already_exists(id.as_str())),
            Err(pos) => {
                self.beds.insert(pos, Bed::new(id));
                Ok(&self.beds[pos])
            }
        }
    }

    /// Deletes a bed.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Conflict`] while the bed is occupied.
    pub fn remove(&mut self, id: &BedId) -> Result<Bed> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| RegistryError::not_found(id.as_str()))?;
        if self.beds[idx].state.is_occupied() {
            return Err(RegistryError::conflict(id.as_str()));
        }
        Ok(self.beds.remove(idx))
    }

    /// Places a patient in an `Available` or `Ready` bed.
    pub fn occupy(&mut self, id: &BedId, patient: impl Into<String>) -> Result<()> {
        self.occupy_at(id, patient, Utc::now())
    }

    /// [`BedRegistry::occupy`] with an explicit timestamp.
    pub fn occupy_at(
        &mut self,
        id: &BedId,
        patient: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let bed = self.bed_mut(id)?;
        let from = bed.state.status();
        if !from.accepts_patient() {
            return Err(RegistryError::invalid_transition(bed.id.as_str(), from));
        }
        let patient = patient.into();
        bed.state = BedState::Occupied {
            patient: patient.clone(),
            since: now,
        };
        bed.history.push(HistoryEntry::EnteredOccupancy {
            from,
            at: now,
            patient,
        });
        Ok(())
    }

    /// Releases the patient from an `Occupied` bed, transitioning it to
    /// `Ready`.
    ///
    /// Returns the finalized dwell duration, formatted.
    pub fn release(&mut self, id: &BedId) -> Result<String> {
        self.release_at(id, Utc::now())
    }

    /// [`BedRegistry::release`] with an explicit timestamp.
    pub fn release_at(&mut self, id: &BedId, now: DateTime<Utc>) -> Result<String> {
        let bed = self.bed_mut(id)?;
        let (patient, since) = match &bed.state {
            BedState::Occupied { patient, since } => (patient.clone(), *since),
            other => {
                return Err(RegistryError::invalid_transition(
                    bed.id.as_str(),
                    other.status(),
                ));
            }
        };
        let dwell = format_dwell(now - since);
        bed.state = BedState::Ready;
        bed.history.push(HistoryEntry::LeftOccupancy {
            at: now,
            patient,
            dwell: dwell.clone(),
        });
        Ok(dwell)
    }

    /// Sends an `Available` or `Ready` bed to cleaning.
    pub fn start_cleaning(&mut self, id: &BedId) -> Result<()> {
        self.start_cleaning_at(id, Utc::now())
    }

    /// [`BedRegistry::start_cleaning`] with an explicit timestamp.
    pub fn start_cleaning_at(&mut self, id: &BedId, now: DateTime<Utc>) -> Result<()> {
        self.transition(
            id,
            &[BedStatus::Available, BedStatus::Ready],
            BedState::Cleaning,
            now,
        )
    }

    /// Marks a `Cleaning` bed as `Ready`.
    pub fn finish_cleaning(&mut self, id: &BedId) -> Result<()> {
        self.finish_cleaning_at(id, Utc::now())
    }

    /// [`BedRegistry::finish_cleaning`] with an explicit timestamp.
    pub fn finish_cleaning_at(&mut self, id: &BedId, now: DateTime<Utc>) -> Result<()> {
        self.transition(id, &[BedStatus::Cleaning], BedState::Ready, now)
    }

    /// Takes an `Available` or `Ready` bed out of service.
    pub fn start_maintenance(&mut self, id: &BedId) -> Result<()> {
        self.start_maintenance_at(id, Utc::now())
    }

    /// [`BedRegistry::start_maintenance`] with an explicit timestamp.
    pub fn start_maintenance_at(&mut self, id: &BedId, now: DateTime<Utc>) -> Result<()> {
        self.transition(
            id,
            &[BedStatus::Available, BedStatus::Ready],
            BedState::Maintenance,
            now,
        )
    }

    /// Returns a `Maintenance` bed to service as `Ready`.
    pub fn finish_maintenance(&mut self, id: &BedId) -> Result<()> {
        self.finish_maintenance_at(id, Utc::now())
    }

    /// [`BedRegistry::finish_maintenance`] with an explicit timestamp.
    pub fn finish_maintenance_at(&mut self, id: &BedId, now: DateTime<Utc>) -> Result<()> {
        self.transition(id, &[BedStatus::Maintenance], BedState::Ready, now)
    }

    // -- Internals -----------------------------------------------------------

    fn index_of(&self, id: &BedId) -> Option<usize> {
        self.beds.binary_search_by(|b| b.id.cmp(id)).ok()
    }

    fn bed_mut(&mut self, id: &BedId) -> Result<&mut Bed> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| RegistryError::not_found(id.as_str()))?;
        Ok(&mut self.beds[idx])
    }

    /// Patient-free transition: checks the allowed source statuses, swaps
    /// the state, appends one `StatusChanged` entry.
    fn transition(
        &mut self,
        id: &BedId,
        allowed_from: &[BedStatus],
        to: BedState,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let bed = self.bed_mut(id)?;
        let from = bed.state.status();
        if !allowed_from.contains(&from) {
            return Err(RegistryError::invalid_transition(bed.id.as_str(), from));
        }
        let to_status = to.status();
        bed.state = to;
        bed.history.push(HistoryEntry::StatusChanged {
            from,
            to: to_status,
            at: now,
        });
        Ok(())
    }
}
