//! The compaction engine: translates input events into log mutations.

use tc_core::{LinkId, TransitEvent, VehicleId};

use crate::record::{CompactedLogs, OccupancySnapshotEntry, TraversalRecord};
use crate::{
    CompactionObserver, CompactionResult, ModeRegistry, NoopObserver, OccupancyTracker,
    TraversalLog,
};

/// Owns one [`ModeRegistry`], one [`OccupancyTracker`], and one
/// [`TraversalLog`] and drives them from the event stream.
///
/// Strictly single-threaded and synchronous: every event is dispatched to
/// completion before the next, and the engine performs no reordering or
/// buffering.  Events must arrive in non-decreasing timestamp order exactly
/// as the simulation recorded them — this is a precondition, not a runtime
/// check.  One engine instance serves one import; nothing else may mutate
/// its components mid-run.
#[derive(Debug, Default)]
pub struct CompactionEngine {
    modes: ModeRegistry,
    occupancy: OccupancyTracker,
    log: TraversalLog,
}

impl CompactionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch a single event.
    ///
    /// Callers that want skip-and-log error handling loop over `handle`
    /// themselves; [`process`][Self::process] aborts on the first error.
    ///
    /// # Errors
    ///
    /// Any [`CompactionError`][crate::CompactionError]: a close with no
    /// open traversal, or an alight that does not match the tracked
    /// occupant state.  The offending event has no effect.
    pub fn handle(&mut self, event: &TransitEvent) -> CompactionResult<()> {
        self.dispatch(event, &mut NoopObserver)
    }

    /// Consume a whole event stream, aborting on the first inconsistency.
    ///
    /// Observer hooks fire after each open and close, plus once at stream
    /// end with the full tables.  Returns the number of events consumed.
    pub fn process<I, O>(&mut self, events: I, observer: &mut O) -> CompactionResult<u64>
    where
        I: IntoIterator<Item = TransitEvent>,
        O: CompactionObserver,
    {
        let mut processed = 0u64;
        for event in events {
            self.dispatch(&event, observer)?;
            processed += 1;
        }
        observer.on_stream_end(self.log.records(), self.log.occupancy());
        Ok(processed)
    }

    /// Traversal records compiled so far, in creation order.
    pub fn traversals(&self) -> &[TraversalRecord] {
        self.log.records()
    }

    /// Occupancy ledger rows emitted so far.
    pub fn occupancy_entries(&self) -> &[OccupancySnapshotEntry] {
        self.log.occupancy()
    }

    /// The traversal log (read access for mid-run inspection).
    pub fn log(&self) -> &TraversalLog {
        &self.log
    }

    /// Finish the import, handing off both tables as an immutable snapshot.
    ///
    /// Traversals still open at this point stay incomplete — an aborted
    /// journey is a terminal state, not an error.
    pub fn finish(self) -> CompactedLogs {
        self.log.into_logs()
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// The single exhaustive mapping from event kind to component calls.
    fn dispatch<O: CompactionObserver>(
        &mut self,
        event:    &TransitEvent,
        observer: &mut O,
    ) -> CompactionResult<()> {
        match event {
            TransitEvent::VehicleEntersTraffic { time, vehicle, link, mode } => {
                self.modes.record_mode(vehicle.clone(), mode.clone());
                let index = self.open_traversal(vehicle, link, *time);
                observer.on_traversal_opened(&self.log.records()[index as usize]);
                Ok(())
            }

            TransitEvent::LinkEnter { time, vehicle, link } => {
                let index = self.open_traversal(vehicle, link, *time);
                observer.on_traversal_opened(&self.log.records()[index as usize]);
                Ok(())
            }

            TransitEvent::LinkLeave { time, vehicle }
            | TransitEvent::VehicleLeavesTraffic { time, vehicle } => {
                let index = self.close_traversal(vehicle, *time)?;
                let record = &self.log.records()[index as usize];
                let emitted = record.occupant_count.unwrap_or(0) as usize;
                let ledger = self.log.occupancy();
                observer.on_traversal_closed(record, &ledger[ledger.len() - emitted..]);
                Ok(())
            }

            TransitEvent::PersonEntersVehicle { vehicle, person, .. } => {
                self.occupancy.board(vehicle.clone(), person.clone());
                Ok(())
            }

            TransitEvent::PersonLeavesVehicle { vehicle, person, .. } => {
                self.occupancy.alight(vehicle, person)
            }
        }
    }

    /// Open a traversal with the mode resolved from the registry at this
    /// instant ("unknown" if the vehicle never announced one).
    fn open_traversal(&mut self, vehicle: &VehicleId, link: &LinkId, time: f64) -> u64 {
        let mode = self.modes.mode_of(vehicle);
        self.log.open(vehicle.clone(), link.clone(), mode, time)
    }

    /// Close the vehicle's open traversal, snapshotting its current
    /// occupants into the ledger.
    fn close_traversal(&mut self, vehicle: &VehicleId, time: f64) -> CompactionResult<u64> {
        // Split borrow: occupant slice from the tracker, mutation on the log.
        let occupants = self.occupancy.current_occupants(vehicle);
        self.log.close(vehicle, time, occupants)
    }
}
