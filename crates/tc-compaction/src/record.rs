//! Plain data row types produced by the compaction pass, plus the
//! end-of-run handoff bundle.

use tc_core::{LinkId, Mode, PersonId, VehicleId};

/// One contiguous interval during which a vehicle occupies one link.
///
/// `end_time` and `occupant_count` stay `None` for traversals whose close
/// event never arrived before the stream ended (an aborted journey, not an
/// error).  Absent means *absent*: consumers must filter on
/// [`is_complete`][Self::is_complete] before any time arithmetic rather
/// than treat the fields as zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraversalRecord {
    /// Creation-order index: strictly increasing, gapless, never reused.
    pub index: u64,
    pub vehicle: VehicleId,
    pub link: LinkId,
    /// Mode resolved at open time from the vehicle's last announcement;
    /// `"unknown"` if it had never announced one.
    pub mode: Mode,
    /// Simulation seconds at which the vehicle entered the link.
    pub start_time: f64,
    /// Simulation seconds at which the vehicle left the link, if it did.
    pub end_time: Option<f64>,
    /// Occupants aboard at the instant of close, duplicates included.
    pub occupant_count: Option<u32>,
}

impl TraversalRecord {
    /// `true` once the traversal has been closed and frozen.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.end_time.is_some()
    }

    /// Dwell duration in seconds, `None` for aborted journeys.
    pub fn travel_time(&self) -> Option<f64> {
        self.end_time.map(|end| end - self.start_time)
    }
}

/// One occupant present at the moment a traversal closed.
///
/// Emitted in board order, one row per occupant (duplicates included), in
/// the same call that freezes the referenced record.  Never mutated or
/// deleted afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancySnapshotEntry {
    /// Foreign key into the traversal log.
    pub traversal_index: u64,
    pub person: PersonId,
}

/// The finished logs, handed off by value once the stream is exhausted.
///
/// Both tables are immutable from the downstream aggregator's point of
/// view; it joins them against its own reference tables (network links,
/// vehicle registry, schedule).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompactedLogs {
    /// Traversal records in creation (index) order, incomplete ones included.
    pub traversals: Vec<TraversalRecord>,
    /// Occupancy ledger rows in emission order.
    pub occupancy: Vec<OccupancySnapshotEntry>,
}

impl CompactedLogs {
    /// Only the traversals whose close event arrived.
    pub fn completed(&self) -> impl Iterator<Item = &TraversalRecord> {
        self.traversals.iter().filter(|record| record.is_complete())
    }

    /// Ledger rows for one traversal, in board order.
    pub fn occupants_of(&self, traversal_index: u64) -> impl Iterator<Item = &PersonId> {
        self.occupancy
            .iter()
            .filter(move |entry| entry.traversal_index == traversal_index)
            .map(|entry| &entry.person)
    }
}
