//! Route: maps a domain path to a shared-rules policy.

use crate::checksum::Checksum;
use crate::keys::{DomainKey, RouteKey, SharedRulesKey, ZoneKey};
use crate::resource::Resource;
use crate::rule::{rules_valid, Rule};
use crate::ser::null_as_empty;
use crate::validation::{check_key, ValidationError};
use serde::{Deserialize, Serialize};

/// Maps requests for a path under a domain to a pool of instances.
///
/// Route-level `rules` are tried before the referenced shared-rules
/// policy; the policy's default applies when nothing matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Overwritten on create.
    #[serde(default)]
    pub route_key: RouteKey,
    pub name: String,
    pub domain_key: DomainKey,
    pub zone_key: ZoneKey,
    pub path: String,
    pub shared_rules_key: SharedRulesKey,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub checksum: Checksum,
}

impl Resource for Route {
    const COLLECTION: &'static str = "route";

    fn key(&self) -> &str {
        self.route_key.as_str()
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
            check_key(self.route_key.as_str(), &mut errs, "route.route_key");
        }
        check_key(self.shared_rules_key.as_str(), &mut errs, "route.shared_rules_key");
        check_key(self.domain_key.as_str(), &mut errs, "route.domain_key");
        check_key(self.zone_key.as_str(), &mut errs, "route.zone_key");

        if self.path.is_empty() {
            errs.push("route.path", "must not be empty");
        }

        errs.merge_prefixed("route", rules_valid(&self.rules));

        errs.into_result()
    }
}
