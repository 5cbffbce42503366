//! Compaction observer trait for progress reporting.

use crate::record::{OccupancySnapshotEntry, TraversalRecord};

/// Callbacks invoked by [`CompactionEngine::process`][crate::CompactionEngine::process]
/// as the stream is consumed.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ClosePrinter;
///
/// impl CompactionObserver for ClosePrinter {
///     fn on_traversal_closed(&mut self, record: &TraversalRecord, _: &[OccupancySnapshotEntry]) {
///         println!("closed #{} on {}", record.index, record.link);
///     }
/// }
/// ```
pub trait CompactionObserver {
    /// Called right after a traversal is opened.  The record is still
    /// incomplete (`end_time`/`occupant_count` absent).
    fn on_traversal_opened(&mut self, _record: &TraversalRecord) {}

    /// Called right after a traversal closes.  `snapshot` holds the ledger
    /// rows emitted for this close, in board order.
    fn on_traversal_closed(
        &mut self,
        _record:   &TraversalRecord,
        _snapshot: &[OccupancySnapshotEntry],
    ) {
    }

    /// Called once after the last event, with the full tables.
    fn on_stream_end(
        &mut self,
        _records:   &[TraversalRecord],
        _occupancy: &[OccupancySnapshotEntry],
    ) {
    }
}

/// A [`CompactionObserver`] that does nothing.  Use when you need to call
/// `process` but don't want callbacks.
pub struct NoopObserver;

impl CompactionObserver for NoopObserver {}
