//! The append-only traversal log and its open/close lifecycle.

use rustc_hash::FxHashMap;
use tc_core::{LinkId, Mode, PersonId, VehicleId};

use crate::record::{CompactedLogs, OccupancySnapshotEntry, TraversalRecord};
use crate::{CompactionError, CompactionResult};

/// Append-only sequence of [`TraversalRecord`]s plus the occupancy ledger
/// emitted as traversals close.
///
/// Indices are allocated at open time and equal the record's position in
/// the log, so the sequence is strictly increasing and gapless across all
/// vehicles for the lifetime of one run.
///
/// Per-vehicle lifecycle: `NoTraversal → Open → Closed → Open → …`.
/// Opening unconditionally replaces the vehicle's open entry, even when the
/// previous traversal was never closed — the abandoned record simply stays
/// incomplete.  `Open` at end-of-stream is an accepted terminal state (an
/// aborted journey), not an error.
#[derive(Debug, Default)]
pub struct TraversalLog {
    records: Vec<TraversalRecord>,
    occupancy: Vec<OccupancySnapshotEntry>,
    /// Index of each vehicle's most recently opened, not-yet-closed record.
    open: FxHashMap<VehicleId, u64>,
}

impl TraversalLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a traversal for `vehicle` on `link` at `start_time`.
    ///
    /// Allocates the next index, appends an incomplete record, and makes it
    /// the vehicle's open traversal (replacing any previous one).  Never
    /// fails.  `mode` is the vehicle's mode as resolved at this instant; it
    /// is frozen into the record and unaffected by later announcements.
    pub fn open(&mut self, vehicle: VehicleId, link: LinkId, mode: Mode, start_time: f64) -> u64 {
        let index = self.records.len() as u64;
        self.records.push(TraversalRecord {
            index,
            vehicle: vehicle.clone(),
            link,
            mode,
            start_time,
            end_time: None,
            occupant_count: None,
        });
        self.open.insert(vehicle, index);
        index
    }

    /// Close `vehicle`'s open traversal at `end_time`, snapshotting
    /// `occupants` into the ledger.
    ///
    /// Freezes the record (`end_time`, `occupant_count = occupants.len()`)
    /// and emits one ledger row per occupant in board order.  The occupant
    /// ids are copied by value, so later tracker mutations cannot reach
    /// already-emitted rows.  Returns the closed index.
    ///
    /// # Errors
    ///
    /// [`CompactionError::NoOpenTraversal`] if the vehicle has no open
    /// record (never opened, or already closed).
    pub fn close(
        &mut self,
        vehicle: &VehicleId,
        end_time: f64,
        occupants: &[PersonId],
    ) -> CompactionResult<u64> {
        let index = self
            .open
            .remove(vehicle)
            .ok_or_else(|| CompactionError::NoOpenTraversal(vehicle.clone()))?;

        let record = &mut self.records[index as usize];
        record.end_time = Some(end_time);
        record.occupant_count = Some(occupants.len() as u32);

        self.occupancy.extend(occupants.iter().map(|person| OccupancySnapshotEntry {
            traversal_index: index,
            person: person.clone(),
        }));

        Ok(index)
    }

    /// All records in creation order, incomplete ones included.
    ///
    /// Consumers doing time arithmetic must filter on
    /// [`TraversalRecord::is_complete`] first.
    pub fn records(&self) -> &[TraversalRecord] {
        &self.records
    }

    /// The occupancy ledger in emission order.
    pub fn occupancy(&self) -> &[OccupancySnapshotEntry] {
        &self.occupancy
    }

    /// Index of `vehicle`'s currently open traversal, if any.
    pub fn open_index(&self, vehicle: &VehicleId) -> Option<u64> {
        self.open.get(vehicle).copied()
    }

    /// Number of records, complete or not.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the log into the immutable end-of-run handoff.
    pub fn into_logs(self) -> CompactedLogs {
        CompactedLogs {
            traversals: self.records,
            occupancy: self.occupancy,
        }
    }
}
