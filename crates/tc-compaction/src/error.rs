//! Compaction error type.
//!
//! All three kinds signal malformed input event ordering and are
//! recoverable by the caller: abort the import or skip the event and keep
//! going.  None of them is ever silently defaulted — a manufactured
//! `occupant_count = 0` row is indistinguishable from a genuinely empty
//! vehicle.

use tc_core::{PersonId, VehicleId};
use thiserror::Error;

/// A consistency violation detected while dispatching one event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompactionError {
    /// An alight referenced a vehicle that never had any occupant tracked.
    #[error("vehicle {0} has no tracked occupant state")]
    UnknownVehicle(VehicleId),

    /// An alight referenced a person not currently aboard.
    #[error("person {person} is not aboard vehicle {vehicle}")]
    PersonNotAboard { vehicle: VehicleId, person: PersonId },

    /// A close arrived for a vehicle with no open traversal.
    #[error("vehicle {0} has no open traversal to close")]
    NoOpenTraversal(VehicleId),
}

/// Shorthand result type for the compaction crate.
pub type CompactionResult<T> = Result<T, CompactionError>;
