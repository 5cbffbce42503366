//! `tc-core` — foundational types for the transit-compaction pipeline.
//!
//! This crate is a dependency of every other `tc-*` crate.  It intentionally
//! has no `tc-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `VehicleId`, `PersonId`, `LinkId`                 |
//! | [`mode`]    | `Mode` (open-ended transport mode string)         |
//! | [`event`]   | `TransitEvent` — the six input event kinds        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod event;
pub mod ids;
pub mod mode;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use event::TransitEvent;
pub use ids::{LinkId, PersonId, VehicleId};
pub use mode::Mode;
