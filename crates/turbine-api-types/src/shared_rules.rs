//! SharedRules: a reusable routing policy attachable to multiple routes.

use crate::checksum::Checksum;
use crate::constraint::AllConstraints;
use crate::keys::{SharedRulesKey, ZoneKey};
use crate::resource::Resource;
use crate::rule::{rules_valid, Rule};
use crate::ser::null_as_empty;
use crate::validation::{check_key, ValidationError};
use serde::{Deserialize, Serialize};

/// A weighted-cluster policy shared by a number of routes.
///
/// If none of the `rules` applies to a request, the `default` constraints
/// are used. If one or more applies, rule order informs which is tried
/// first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedRules {
    /// Overwritten on create.
    #[serde(default)]
    pub shared_rules_key: SharedRulesKey,
    pub name: String,
    pub zone_key: ZoneKey,
    #[serde(default)]
    pub default: AllConstraints,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub checksum: Checksum,
}

impl Resource for SharedRules {
    const COLLECTION: &'static str = "shared_rules";

    fn key(&self) -> &str {
        self.shared_rules_key.as_str()
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
            check_key(
                self.shared_rules_key.as_str(),
                &mut errs,
                "shared_rules.shared_rules_key",
            );
        }
        check_key(&self.name, &mut errs, "shared_rules.name");
        check_key(self.zone_key.as_str(), &mut errs, "shared_rules.zone_key");

        errs.merge_prefixed("shared_rules.default", self.default.is_valid(true));
        errs.merge_prefixed("shared_rules", rules_valid(&self.rules));

        errs.into_result()
    }
}
