//! Serde helpers for the v1.0 wire format.

use serde::{Deserialize, Deserializer};

/// Deserialize a sequence field that the server may transmit as `null`.
///
/// Optional nested sequences are never semantically null; absence is
/// represented in memory as an empty vector so equality and iteration
/// never have to distinguish the two.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
