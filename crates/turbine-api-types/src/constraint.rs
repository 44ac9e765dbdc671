//! Weighted cluster constraints: the right-hand side of routing rules.

use crate::keys::{ClusterKey, ConstraintKey};
use crate::metadata::Metadata;
use crate::ser::null_as_empty;
use crate::validation::{check_key, ValidationError};
use serde::{Deserialize, Serialize};

/// A weighted selection of instances from one cluster.
///
/// Instances in the keyed cluster with a superset of the specified
/// metadata are included; the weight informs selection of one constraint
/// over another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterConstraint {
    #[serde(default)]
    pub constraint_key: ConstraintKey,
    pub cluster_key: ClusterKey,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub metadata: Metadata,
    pub weight: u32,
}

impl ClusterConstraint {
    /// A constraint sending the full weight to one cluster.
    pub fn whole(constraint_key: impl Into<ConstraintKey>, cluster_key: ClusterKey) -> Self {
        Self {
            constraint_key: constraint_key.into(),
            cluster_key,
            metadata: Metadata::new(),
            weight: 100,
        }
    }

    pub fn is_valid(&self) -> Result<(), ValidationError> {
        let mut errs = ValidationError::new();

        check_key(self.constraint_key.as_str(), &mut errs, "constraint_key");
        check_key(self.cluster_key.as_str(), &mut errs, "cluster_key");

        if self.weight == 0 {
            errs.push("weight", "must be greater than 0");
        }

        for (i, md) in self.metadata.iter().enumerate() {
            if md.key.is_empty() {
                errs.push(format!("metadata[{i}].key"), "must not be empty");
            }
            if md.value.is_empty() {
                errs.push(format!("metadata[{i}].value"), "must not be empty");
            }
        }

        errs.into_result()
    }
}

/// The three constraint vectors of a rule or shared-rules default.
///
/// `light` selects the instance serving the live request. `dark` selects
/// an instance for a send-and-forget copy. `tap` selects an instance whose
/// response is compared against the light response. `dark` and `tap` may
/// be empty; a default's `light` must contain at least one entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllConstraints {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub light: Vec<ClusterConstraint>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dark: Vec<ClusterConstraint>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tap: Vec<ClusterConstraint>,
}

impl AllConstraints {
    /// A default mapping 100% of traffic to one cluster.
    pub fn uniform(constraint_key: impl Into<ConstraintKey>, cluster_key: ClusterKey) -> Self {
        Self {
            light: vec![ClusterConstraint::whole(constraint_key, cluster_key)],
            dark: Vec::new(),
            tap: Vec::new(),
        }
    }

    pub fn is_valid(&self, require_light: bool) -> Result<(), ValidationError> {
        let mut errs = ValidationError::new();

        if require_light && self.light.is_empty() {
            errs.push("light", "must contain at least one constraint");
        }

        for (vector, constraints) in
            [("light", &self.light), ("dark", &self.dark), ("tap", &self.tap)]
        {
            for (i, cc) in constraints.iter().enumerate() {
                errs.merge_prefixed(&format!("{vector}[{i}]"), cc.is_valid());
            }
        }

        errs.into_result()
    }
}
