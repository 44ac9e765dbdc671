//! Fixture dependency graph for contract-test sessions.
//!
//! Dependent-resource scenarios need a minimal valid universe before they
//! can run: a zone, a domain and cluster inside it, and a shared-rules
//! policy weighting the cluster. The builder resolves each get-or-create
//! style in dependency order, bottom-up, since every template references
//! the key produced by the previous step.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::resolve::resolve;
use turbine_api_types::{
    AllConstraints, Cluster, Domain, Match, MatchKind, Metadatum, Route, Rule, SharedRules, Zone,
};

/// Logical names for the fixture resources of one test session.
#[derive(Debug, Clone)]
pub struct FixtureNames {
    pub zone: String,
    pub domain: String,
    pub cluster: String,
    pub shared_rules: String,
    pub route: String,
}

impl Default for FixtureNames {
    fn default() -> Self {
        Self {
            zone: "testzone".to_string(),
            domain: "testdomain".to_string(),
            cluster: "testcluster".to_string(),
            shared_rules: "testsharedrules".to_string(),
            route: "testroute".to_string(),
        }
    }
}

/// Last-known snapshots of the session's fixture resources.
///
/// Threaded explicitly through the builder and downstream scenario calls;
/// lifetime is one test session. Each snapshot holds the key and checksum
/// from the most recent successful fetch, so scenarios start from fresh
/// checksums rather than a global stash of stale ones.
#[derive(Debug, Clone, Default)]
pub struct FixtureContext {
    pub zone: Option<Zone>,
    pub domain: Option<Domain>,
    pub cluster: Option<Cluster>,
    pub shared_rules: Option<SharedRules>,
    pub route: Option<Route>,
}

impl FixtureContext {
    fn zone(&self) -> Result<&Zone, ApiError> {
        self.zone.as_ref().ok_or_else(|| missing("zone"))
    }

    fn domain(&self) -> Result<&Domain, ApiError> {
        self.domain.as_ref().ok_or_else(|| missing("domain"))
    }

    fn cluster(&self) -> Result<&Cluster, ApiError> {
        self.cluster.as_ref().ok_or_else(|| missing("cluster"))
    }

    fn shared_rules(&self) -> Result<&SharedRules, ApiError> {
        self.shared_rules.as_ref().ok_or_else(|| missing("shared_rules"))
    }
}

fn missing(slot: &'static str) -> ApiError {
    ApiError::NotFound { collection: slot, key: "<fixture>".to_string() }
}

/// Builds the zone → domain/cluster → shared_rules graph once per
/// session; [`FixtureGraph::resolve_route`] hangs routes off it for
/// downstream scenarios.
pub struct FixtureGraph<'a> {
    client: &'a ApiClient,
    names: FixtureNames,
}

impl<'a> FixtureGraph<'a> {
    pub fn new(client: &'a ApiClient, names: FixtureNames) -> Self {
        Self { client, names }
    }

    /// Resolve the fixture universe in dependency order.
    pub async fn build(&self) -> Result<FixtureContext, ApiError> {
        let mut ctx = FixtureContext::default();

        let zone = resolve(self.client, &self.names.zone, Zone::named(&self.names.zone)).await?;
        tracing::info!(zone = %zone.zone_key, "fixture zone ready");

        let domain = resolve(
            self.client,
            &self.names.domain,
            Domain {
                zone_key: zone.zone_key.clone(),
                name: self.names.domain.clone(),
                port: 8080,
                ..Domain::default()
            },
        )
        .await?;

        let cluster = resolve(
            self.client,
            &self.names.cluster,
            Cluster {
                zone_key: zone.zone_key.clone(),
                name: self.names.cluster.clone(),
                ..Cluster::default()
            },
        )
        .await?;

        let shared_rules = resolve(
            self.client,
            &self.names.shared_rules,
            SharedRules {
                name: self.names.shared_rules.clone(),
                zone_key: zone.zone_key.clone(),
                default: AllConstraints::uniform("cc-default", cluster.cluster_key.clone()),
                rules: vec![sample_rule(&cluster)],
                ..SharedRules::default()
            },
        )
        .await?;
        tracing::info!(
            domain = %domain.domain_key,
            cluster = %cluster.cluster_key,
            shared_rules = %shared_rules.shared_rules_key,
            "fixture graph ready"
        );

        ctx.zone = Some(zone);
        ctx.domain = Some(domain);
        ctx.cluster = Some(cluster);
        ctx.shared_rules = Some(shared_rules);
        Ok(ctx)
    }

    /// Resolve the session route against an already-built context. Kept
    /// separate from [`FixtureGraph::build`] because route scenarios run
    /// downstream of the shared graph.
    pub async fn resolve_route(&self, ctx: &mut FixtureContext) -> Result<Route, ApiError> {
        let zone = ctx.zone()?;
        let domain = ctx.domain()?;
        let cluster = ctx.cluster()?;
        let shared_rules = ctx.shared_rules()?;

        let route = resolve(
            self.client,
            &self.names.route,
            Route {
                name: self.names.route.clone(),
                zone_key: zone.zone_key.clone(),
                domain_key: domain.domain_key.clone(),
                shared_rules_key: shared_rules.shared_rules_key.clone(),
                path: "/".to_string(),
                rules: vec![sample_rule(cluster)],
                ..Route::default()
            },
        )
        .await?;

        ctx.route = Some(route.clone());
        Ok(route)
    }
}

/// An inert rule weighting all matched traffic to `cluster`. Never
/// evaluated against real traffic; it exists to exercise create/read
/// schema validation on rule-carrying resources.
fn sample_rule(cluster: &Cluster) -> Rule {
    Rule {
        rule_key: "fixture-rule".into(),
        methods: vec!["GET".to_string(), "POST".to_string()],
        matches: vec![Match {
            kind: MatchKind::Header,
            from: Metadatum::new("X-Fixture-Variant", ""),
            to: Metadatum::new("variant", ""),
        }],
        constraints: AllConstraints::uniform("cc-fixture", cluster.cluster_key.clone()),
    }
}
