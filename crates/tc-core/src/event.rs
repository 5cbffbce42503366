//! The input event stream vocabulary.
//!
//! # Ordering precondition
//!
//! The compaction engine consumes events strictly in the order the
//! simulation recorded them, which is non-decreasing in `time`.  Nothing
//! here re-sorts, buffers, or validates ordering: delivering events out of
//! order is a caller bug with undefined results (indices stay gapless but
//! mode resolution and occupant snapshots become meaningless).
//!
//! Timestamps are `f64` simulation seconds, exactly as recorded upstream.

use crate::{LinkId, Mode, PersonId, VehicleId};

/// One event from the simulation's transit stream.
///
/// A closed union: the engine dispatches with a single exhaustive `match`,
/// so adding a variant is a compile-time-visible change everywhere.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitEvent {
    /// A vehicle joins traffic on `link`, announcing its `mode`.
    VehicleEntersTraffic {
        time:    f64,
        vehicle: VehicleId,
        link:    LinkId,
        mode:    Mode,
    },

    /// A vehicle crosses onto a new link.  Mode is whatever the vehicle
    /// last announced.
    LinkEnter {
        time:    f64,
        vehicle: VehicleId,
        link:    LinkId,
    },

    /// A vehicle crosses off its current link.
    LinkLeave {
        time:    f64,
        vehicle: VehicleId,
    },

    /// A vehicle leaves traffic, ending its final link dwell.
    VehicleLeavesTraffic {
        time:    f64,
        vehicle: VehicleId,
    },

    /// A person boards a vehicle.
    PersonEntersVehicle {
        time:    f64,
        vehicle: VehicleId,
        person:  PersonId,
    },

    /// A person alights from a vehicle.
    PersonLeavesVehicle {
        time:    f64,
        vehicle: VehicleId,
        person:  PersonId,
    },
}

impl TransitEvent {
    /// Simulation timestamp of this event, in seconds.
    pub fn time(&self) -> f64 {
        match self {
            TransitEvent::VehicleEntersTraffic { time, .. }
            | TransitEvent::LinkEnter { time, .. }
            | TransitEvent::LinkLeave { time, .. }
            | TransitEvent::VehicleLeavesTraffic { time, .. }
            | TransitEvent::PersonEntersVehicle { time, .. }
            | TransitEvent::PersonLeavesVehicle { time, .. } => *time,
        }
    }

    /// The vehicle this event concerns.  Every event kind carries one.
    pub fn vehicle(&self) -> &VehicleId {
        match self {
            TransitEvent::VehicleEntersTraffic { vehicle, .. }
            | TransitEvent::LinkEnter { vehicle, .. }
            | TransitEvent::LinkLeave { vehicle, .. }
            | TransitEvent::VehicleLeavesTraffic { vehicle, .. }
            | TransitEvent::PersonEntersVehicle { vehicle, .. }
            | TransitEvent::PersonLeavesVehicle { vehicle, .. } => vehicle,
        }
    }
}
