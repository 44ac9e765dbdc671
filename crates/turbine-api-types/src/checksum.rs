//! Opaque version token carried by every mutable resource.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Version token the server assigns on every successful mutation.
///
/// A client-held checksum is valid only until the next successful mutation
/// of that resource, by anyone. Mutating operations must supply the
/// freshest value; the server rejects stale ones with a conflict.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checksum(pub String);

impl Checksum {
    /// An empty checksum is equivalent to an unset checksum.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Checksum {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Checksum {
    fn from(s: String) -> Self {
        Self(s)
    }
}
