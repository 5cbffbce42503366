//! Per-vehicle occupant lists.

use rustc_hash::FxHashMap;
use tc_core::{PersonId, VehicleId};

use crate::{CompactionError, CompactionResult};

/// Tracks who is currently aboard each vehicle, in board order.
///
/// Boarding is multiset-style: the same person boarding twice before
/// alighting produces two entries and inflates the occupant count.  Alight
/// removes the first occurrence only.
///
/// "Untracked" and "empty" are distinct states: a vehicle becomes tracked
/// on its first board and stays tracked after everyone alights.  Alighting
/// from a never-tracked vehicle is [`CompactionError::UnknownVehicle`];
/// alighting an absent person from a tracked vehicle is
/// [`CompactionError::PersonNotAboard`].
#[derive(Debug, Default)]
pub struct OccupancyTracker {
    occupants: FxHashMap<VehicleId, Vec<PersonId>>,
}

impl OccupancyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `person` to `vehicle`'s occupant list, creating the list on
    /// first board.  Never fails and never deduplicates.
    pub fn board(&mut self, vehicle: VehicleId, person: PersonId) {
        self.occupants.entry(vehicle).or_default().push(person);
    }

    /// Remove the first occurrence of `person` from `vehicle`'s list.
    pub fn alight(&mut self, vehicle: &VehicleId, person: &PersonId) -> CompactionResult<()> {
        let list = self
            .occupants
            .get_mut(vehicle)
            .ok_or_else(|| CompactionError::UnknownVehicle(vehicle.clone()))?;
        let position = list.iter().position(|aboard| aboard == person).ok_or_else(|| {
            CompactionError::PersonNotAboard {
                vehicle: vehicle.clone(),
                person:  person.clone(),
            }
        })?;
        list.remove(position);
        Ok(())
    }

    /// Current occupants of `vehicle` in board order; empty for untracked
    /// vehicles.
    pub fn current_occupants(&self, vehicle: &VehicleId) -> &[PersonId] {
        self.occupants.get(vehicle).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `true` once `vehicle` has had at least one board, even if everyone
    /// has since alighted.
    pub fn is_tracked(&self, vehicle: &VehicleId) -> bool {
        self.occupants.contains_key(vehicle)
    }
}
