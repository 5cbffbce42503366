//! Strongly typed identifier wrappers.
//!
//! Vehicles, persons, and links are identified by externally-assigned string
//! ids carried verbatim from the event stream, so each wrapper owns a
//! `String` rather than a dense integer index.  All IDs are
//! `Clone + Ord + Hash` so they can be used as map keys and sorted collection
//! elements without ceremony; `Borrow<str>` lets callers look maps up by
//! `&str` without allocating.

use std::borrow::Borrow;
use std::fmt;

/// Generate a typed ID wrapper around an owned string.
macro_rules! typed_name {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(String);

        impl $name {
            /// Wrap a raw string id.
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// The raw id as announced by the event stream.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Unwrap into the raw `String`.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl Borrow<str> for $name {
            #[inline]
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

typed_name! {
    /// Identifies one vehicle across the whole event stream.
    pub struct VehicleId;
}

typed_name! {
    /// Identifies one person (driver or passenger).
    pub struct PersonId;
}

typed_name! {
    /// Identifies one directed network link.
    pub struct LinkId;
}
