//! Cluster: a named pool of backend instances within a zone.

use crate::checksum::Checksum;
use crate::keys::{ClusterKey, ZoneKey};
use crate::metadata::Metadata;
use crate::resource::Resource;
use crate::ser::null_as_empty;
use crate::validation::{check_key, ValidationError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Pattern an instance hostname must match.
pub const HOST_PATTERN: &str = "^[a-zA-Z0-9_.-]+$";

fn host_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(HOST_PATTERN).unwrap())
}

/// A single backend endpoint within a cluster.
///
/// Identity within the owning cluster is the (host, port) pair; metadata
/// carries constraint-matchable attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub host: String,
    pub port: u16,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub metadata: Metadata,
}

impl Instance {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self { host: host.into(), port, metadata: Metadata::new() }
    }

    /// The `{host}:{port}` identity used in sub-resource paths.
    pub fn key(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_valid(&self) -> Result<(), ValidationError> {
        let mut errs = ValidationError::new();

        if self.host.is_empty() {
            errs.push("host", "must not be empty");
        } else if !host_pattern().is_match(&self.host) {
            errs.push("host", format!("host must match {HOST_PATTERN}"));
        }

        if self.port == 0 {
            errs.push("port", "must be non-zero");
        }

        for (i, md) in self.metadata.iter().enumerate() {
            if md.key.is_empty() {
                errs.push(format!("metadata[{i}].key"), "must not be empty");
            }
        }

        errs.into_result()
    }
}

/// A named list of [`Instance`]s within a zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Overwritten on create.
    #[serde(default)]
    pub cluster_key: ClusterKey,
    pub zone_key: ZoneKey,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub instances: Vec<Instance>,
    #[serde(default)]
    pub checksum: Checksum,
}

impl Cluster {
    /// Find an instance by its (host, port) identity.
    pub fn instance(&self, host: &str, port: u16) -> Option<&Instance> {
        self.instances.iter().find(|i| i.host == host && i.port == port)
    }
}

impl Resource for Cluster {
    const COLLECTION: &'static str = "cluster";

    fn key(&self) -> &str {
        self.cluster_key.as_str()
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
            check_key(self.cluster_key.as_str(), &mut errs, "cluster.cluster_key");
        }
        check_key(self.zone_key.as_str(), &mut errs, "cluster.zone_key");
        check_key(&self.name, &mut errs, "cluster.name");

        let mut seen = HashSet::new();
        for inst in &self.instances {
            if !seen.insert(inst.key()) {
                errs.push(
                    "cluster.instances",
                    format!("multiple instances of key {}", inst.key()),
                );
            }
            errs.merge_prefixed(
                &format!("cluster.instances[{}]", inst.key()),
                inst.is_valid(),
            );
        }

        errs.into_result()
    }
}
