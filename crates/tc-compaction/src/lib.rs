//! `tc-compaction` — compacts an ordered transit event stream into two
//! append-only derived logs.
//!
//! One pass over the stream produces:
//!
//! - a **link-traversal log**: one [`TraversalRecord`] per contiguous
//!   vehicle-on-link interval, with entry/exit time, mode, and occupant
//!   count;
//! - an **occupancy ledger**: one [`OccupancySnapshotEntry`] per occupant
//!   present at the instant a traversal closed.
//!
//! Downstream KPI aggregation (congestion, occupancy rate, modal split, …)
//! is a plain join/group-by consumer of these tables and lives elsewhere.
//!
//! | Module            | Contents                                        |
//! |-------------------|-------------------------------------------------|
//! | [`engine`]        | [`CompactionEngine`] — event dispatch           |
//! | [`traversal`]     | [`TraversalLog`] — open/close lifecycle         |
//! | [`occupancy`]     | [`OccupancyTracker`] — board/alight lists       |
//! | [`mode_registry`] | [`ModeRegistry`] — last-announced vehicle modes |
//! | [`record`]        | Output row types and [`CompactedLogs`]          |
//! | [`observer`]      | [`CompactionObserver`] progress hooks           |
//! | [`error`]         | [`CompactionError`], [`CompactionResult`]       |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tc_compaction::{CompactionEngine, NoopObserver};
//!
//! let mut engine = CompactionEngine::new();
//! engine.process(events, &mut NoopObserver)?;
//! let logs = engine.finish();
//! for record in logs.completed() {
//!     // feed the KPI aggregator
//! }
//! ```

pub mod engine;
pub mod error;
pub mod mode_registry;
pub mod observer;
pub mod occupancy;
pub mod record;
pub mod traversal;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use engine::CompactionEngine;
pub use error::{CompactionError, CompactionResult};
pub use mode_registry::ModeRegistry;
pub use observer::{CompactionObserver, NoopObserver};
pub use occupancy::OccupancyTracker;
pub use record::{CompactedLogs, OccupancySnapshotEntry, TraversalRecord};
pub use traversal::TraversalLog;
