//! Zone: the root grouping of the resource hierarchy.

use crate::checksum::Checksum;
use crate::keys::ZoneKey;
use crate::resource::Resource;
use crate::validation::{check_key, ValidationError};
use serde::{Deserialize, Serialize};

/// A logical grouping that other resources are associated with. A single
/// zone will often map to some geographic region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Overwritten on create.
    #[serde(default)]
    pub zone_key: ZoneKey,
    pub name: String,
    #[serde(default)]
    pub checksum: Checksum,
}

impl Zone {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }
}

impl Resource for Zone {
    const COLLECTION: &'static str = "zone";

    fn key(&self) -> &str {
        self.zone_key.as_str()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn checksum(&self) -> &Checksum {
        &self.checksum
    }

    fn is_valid(&self, precreation: bool) -> Result<(), ValidationError> {
        let mut errs = ValidationError::new();

        if !precreation {
            check_key(self.zone_key.as_str(), &mut errs, "zone.zone_key");
        }
        check_key(&self.name, &mut errs, "zone.name");

        errs.into_result()
    }
}
