//! Transport mode as announced by the event stream.
//!
//! Modes are open-ended strings defined by the upstream simulation
//! ("car", "bus", "rail", …), not a closed enum: the compaction core must
//! carry whatever the stream announces without a recompile.  A vehicle that
//! has never announced a mode resolves to the `"unknown"` sentinel.

use std::fmt;

/// The transport mode associated with a vehicle.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Mode(String);

impl Mode {
    /// Label used for vehicles that never announced a mode.
    pub const UNKNOWN: &'static str = "unknown";

    /// Wrap a raw mode label.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The `"unknown"` sentinel mode.
    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_owned())
    }

    /// `true` if this is the `"unknown"` sentinel.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }

    /// The raw mode label, useful as a table column value.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Mode {
    /// Returns the `"unknown"` sentinel so unresolved modes are visible.
    fn default() -> Self {
        Self::unknown()
    }
}

impl From<&str> for Mode {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for Mode {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
