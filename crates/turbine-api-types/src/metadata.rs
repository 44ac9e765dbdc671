//! Key/value metadata attached to instances and constraints.

use serde::{Deserialize, Serialize};

/// A single key/value pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadatum {
    pub key: String,
    pub value: String,
}

impl Metadatum {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

/// An ordered collection of [`Metadatum`].
pub type Metadata = Vec<Metadatum>;

/// Look up the value for `key`, if present.
pub fn metadata_value<'a>(metadata: &'a Metadata, key: &str) -> Option<&'a str> {
    metadata.iter().find(|m| m.key == key).map(|m| m.value.as_str())
}
