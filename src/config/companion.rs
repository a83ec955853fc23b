use std::collections::BTreeMap;

use serde::Deserialize;

/// Settings read from the companion config file.
///
/// The file may hold other router settings too; keys not listed here are
/// ignored.
///
/// ```toml
/// router_config_path = "router.json"
/// graphql_path = "/graphql"
/// introspection_enabled = false
///
/// [graph]
/// token = "${GRAPH_API_TOKEN}"
///
/// [override_routing_url.subgraphs]
/// employees = "http://localhost:4001/graphql"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    pub graph: GraphConfig,
    pub graphql_path: String,
    pub introspection_enabled: bool,
    pub playground_enabled: bool,
    pub playground_path: String,
    pub override_routing_url: OverrideRoutingUrl,
    /// Supersedes the caller-supplied router config path when non-empty.
    pub router_config_path: Option<String>,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            graph: GraphConfig::default(),
            graphql_path: "/graphql".to_string(),
            introspection_enabled: true,
            playground_enabled: true,
            playground_path: "/".to_string(),
            override_routing_url: OverrideRoutingUrl::default(),
            router_config_path: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub token: String,
}

/// Per-subgraph routing URL replacements, keyed by subgraph name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OverrideRoutingUrl {
    pub subgraphs: BTreeMap<String, String>,
}
