//! # Turbine API Types
//!
//! Core resource model for the Turbine traffic-routing control plane.
//!
//! This crate provides the value types managed by the API (`Zone`, `Domain`,
//! `Proxy`, `Cluster`, `SharedRules`, `Route`), the opaque [`Checksum`] used
//! for optimistic concurrency, client-side [`validation`], and the boundary
//! [`normalize`] step that repairs null optional collections in raw payloads.
//!
//! ## Architecture Role
//!
//! `turbine-api-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!     turbine-api-types (this crate)
//!             │
//!             ▼
//!     turbine-api-client
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde, matching the v1.0 wire format
//! - **Clone** for cheap sharing between fixtures and scenarios
//! - **PartialEq** for testing and comparison, with optional nested
//!   sequences deserialized null-as-empty so `[]` and `null` compare equal

pub mod checksum;
pub mod cluster;
pub mod constraint;
pub mod domain;
pub mod keys;
pub mod metadata;
pub mod normalize;
pub mod proxy;
pub mod resource;
pub mod route;
pub mod rule;
mod ser;
pub mod shared_rules;
pub mod validation;
pub mod zone;

pub use checksum::Checksum;
pub use cluster::{Cluster, Instance};
pub use constraint::{AllConstraints, ClusterConstraint};
pub use domain::Domain;
pub use keys::{
    ClusterKey, ConstraintKey, DomainKey, ProxyKey, RouteKey, RuleKey, SharedRulesKey, ZoneKey,
};
pub use metadata::{Metadata, Metadatum};
pub use normalize::normalize;
pub use proxy::Proxy;
pub use resource::Resource;
pub use route::Route;
pub use rule::{Match, MatchKind, Rule};
pub use shared_rules::SharedRules;
pub use validation::{ErrorCase, ValidationError};
pub use zone::Zone;
