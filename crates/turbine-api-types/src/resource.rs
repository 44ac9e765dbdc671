//! The common capability set shared by every API resource.

use crate::checksum::Checksum;
use crate::validation::ValidationError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A resource the store client can manage generically.
///
/// Every implementor is a value type carrying a server-assigned key, a
/// human-chosen name, and the [`Checksum`] of its last observed revision.
/// `COLLECTION` is the `/v1.0/{collection}` path segment the server files
/// the type under.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static
{
    const COLLECTION: &'static str;

    /// Server-assigned key; empty before creation.
    fn key(&self) -> &str;

    /// Human-chosen name, unique per zone by convention.
    fn name(&self) -> &str;

    fn checksum(&self) -> &Checksum;

    /// Structural validity per the server's rules. With `precreation` set
    /// the server-assigned key is permitted to be empty.
    fn is_valid(&self, precreation: bool) -> Result<(), ValidationError>;
}
