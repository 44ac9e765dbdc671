//! Domain: the (sub)domain under which a set of routes is served.

use crate::checksum::Checksum;
use crate::keys::{DomainKey, ZoneKey};
use crate::resource::Resource;
use crate::validation::{check_key, ValidationError};
use serde::{Deserialize, Serialize};

/// A TLD or subdomain, served on a port, within exactly one zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// Overwritten on create.
    #[serde(default)]
    pub domain_key: DomainKey,
    pub zone_key: ZoneKey,
    pub name: String,
    pub port: u16,
    #[serde(default)]
    pub checksum: Checksum,
}

impl Resource for Domain {
    const COLLECTION: &'static str = "domain";

    fn key(&self) -> &str {
        self.domain_key.as_str()
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
            check_key(self.domain_key.as_str(), &mut errs, "domain.domain_key");
        }
        check_key(self.zone_key.as_str(), &mut errs, "domain.zone_key");
        check_key(&self.name, &mut errs, "domain.name");

        if self.port == 0 {
            errs.push("domain.port", "must be non-zero");
        }

        errs.into_result()
    }
}
