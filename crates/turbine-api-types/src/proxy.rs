//! Proxy: a named serving endpoint responsible for one or more domains.

use crate::checksum::Checksum;
use crate::keys::{DomainKey, ProxyKey, ZoneKey};
use crate::resource::Resource;
use crate::validation::{check_key, ValidationError};
use crate::ser::null_as_empty;
use serde::{Deserialize, Serialize};

/// A named host:port serving the routes of its attached domains.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Proxy {
    /// Overwritten on create.
    #[serde(default)]
    pub proxy_key: ProxyKey,
    pub zone_key: ZoneKey,
    pub name: String,
    pub host: String,
    pub port: u16,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub domain_keys: Vec<DomainKey>,
    #[serde(default)]
    pub checksum: Checksum,
}

impl Resource for Proxy {
    const COLLECTION: &'static str = "proxy";

    fn key(&self) -> &str {
        self.proxy_key.as_str()
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
            check_key(self.proxy_key.as_str(), &mut errs, "proxy.proxy_key");
        }
        check_key(self.zone_key.as_str(), &mut errs, "proxy.zone_key");
        check_key(&self.name, &mut errs, "proxy.name");
        check_key(&self.host, &mut errs, "proxy.host");

        if self.port == 0 {
            errs.push("proxy.port", "must be non-zero");
        }

        for (i, dk) in self.domain_keys.iter().enumerate() {
            if dk.is_empty() {
                errs.push(format!("proxy.domain_keys[{i}]"), "must not be empty");
            }
        }

        errs.into_result()
    }
}
