//! Server-assigned key newtypes for each resource family.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! key_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

key_type!(
    /// Key of a [`Zone`](crate::Zone), the root of the resource hierarchy.
    ZoneKey
);
key_type!(DomainKey);
key_type!(ProxyKey);
key_type!(ClusterKey);
key_type!(SharedRulesKey);
key_type!(RouteKey);
key_type!(
    /// Key of a rule within a `rules` vector; unique within its owner.
    RuleKey
);
key_type!(ConstraintKey);
