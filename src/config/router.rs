use serde::{Deserialize, Serialize};

/// The static router configuration, as serialized in `router.json`.
///
/// The engine configuration is carried through opaquely; only the fields
/// needed to identify the config and its subgraphs are typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticRouterConfig {
    #[serde(default)]
    pub version: String,
    pub engine_config: serde_json::Value,
    #[serde(default)]
    pub subgraphs: Vec<Subgraph>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subgraph {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub routing_url: String,
}
