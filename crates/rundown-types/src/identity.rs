use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

macro_rules! external_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an external identifier as-is. Empty strings are accepted.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Parse an identifier, rejecting the empty string.
            pub fn parse(s: &str) -> Result<Self, TypeError> {
                if s.is_empty() {
                    return Err(TypeError::EmptyIdentifier);
                }
                Ok(Self(s.to_owned()))
            }

            /// The raw external identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` if the source supplied no identifier.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

external_id! {
    /// External identity of a rundown.
    ///
    /// Stable across observations of the same show. Compared by value only;
    /// no structural comparison of the rundown participates in identity.
    RundownId
}

external_id! {
    /// External identity of a segment (story) within a rundown.
    ///
    /// Unique within one rundown. Different rundowns may reuse the same
    /// value, so a segment is keyed by the `(RundownId, SegmentId)` pair.
    SegmentId
}
