//! Last-announced mode per vehicle.

use rustc_hash::FxHashMap;
use tc_core::{Mode, VehicleId};

/// Key-value store mapping each vehicle to its last-announced mode.
///
/// Upserts are last-write-wins and infallible.  Resolution is applied at
/// the *next* traversal open, never retroactively: records opened before a
/// vehicle first announced a mode keep `"unknown"` forever.
#[derive(Debug, Default)]
pub struct ModeRegistry {
    modes: FxHashMap<VehicleId, Mode>,
}

impl ModeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `mode` as the current mode of `vehicle` (last write wins).
    pub fn record_mode(&mut self, vehicle: VehicleId, mode: Mode) {
        self.modes.insert(vehicle, mode);
    }

    /// The mode last recorded for `vehicle`, or [`Mode::unknown`] if none.
    pub fn mode_of(&self, vehicle: &VehicleId) -> Mode {
        self.modes.get(vehicle).cloned().unwrap_or_default()
    }

    /// Number of vehicles with a recorded mode.
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
