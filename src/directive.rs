//! Initialization directives handed to the router runtime.

use std::fmt;

use tracing::Dispatch;

use crate::config::{OverrideRoutingUrl, StaticRouterConfig};

/// Collector receiving GraphQL operation metrics when telemetry is enabled.
pub const METRICS_COLLECTOR_ENDPOINT: &str = "https://cosmo-metrics.wundergraph.com";

/// Version reported in metrics and tracing directives.
pub const BUILD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One initialization instruction for the router runtime.
///
/// The runtime applies directives in sequence order, so a later directive of
/// the same kind overrides an earlier one.
#[derive(Clone)]
#[non_exhaustive]
pub enum Directive {
    Logger(Dispatch),
    AwsLambdaRuntime,
    GraphApiToken(String),
    GraphQLPath(String),
    Introspection(bool),
    Playground(bool),
    PlaygroundPath(String),
    OverrideRoutingUrl(OverrideRoutingUrl),
    StaticRouterConfig(Box<StaticRouterConfig>),
    ListenerAddr(String),
    GraphQLMetrics(GraphQLMetricsConfig),
    Metrics(MetricsConfig),
    Tracing(TracingConfig),
    GraphQLWebUrl(String),
}

impl Directive {
    /// Short name of the directive kind, used in logs and tests.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Logger(_) => "logger",
            Self::AwsLambdaRuntime => "aws_lambda_runtime",
            Self::GraphApiToken(_) => "graph_api_token",
            Self::GraphQLPath(_) => "graphql_path",
            Self::Introspection(_) => "introspection",
            Self::Playground(_) => "playground",
            Self::PlaygroundPath(_) => "playground_path",
            Self::OverrideRoutingUrl(_) => "override_routing_url",
            Self::StaticRouterConfig(_) => "static_router_config",
            Self::ListenerAddr(_) => "listener_addr",
            Self::GraphQLMetrics(_) => "graphql_metrics",
            Self::Metrics(_) => "metrics",
            Self::Tracing(_) => "tracing",
            Self::GraphQLWebUrl(_) => "graphql_web_url",
        }
    }
}

impl fmt::Debug for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Dispatch carries no useful state to print.
            Self::Logger(_) => f.write_str("Logger(..)"),
            Self::AwsLambdaRuntime => f.write_str("AwsLambdaRuntime"),
            // Never print the token itself.
            Self::GraphApiToken(_) => f.write_str("GraphApiToken(***)"),
            Self::GraphQLPath(v) => f.debug_tuple("GraphQLPath").field(v).finish(),
            Self::Introspection(v) => f.debug_tuple("Introspection").field(v).finish(),
            Self::Playground(v) => f.debug_tuple("Playground").field(v).finish(),
            Self::PlaygroundPath(v) => f.debug_tuple("PlaygroundPath").field(v).finish(),
            Self::OverrideRoutingUrl(v) => f.debug_tuple("OverrideRoutingUrl").field(v).finish(),
            Self::StaticRouterConfig(v) => f
                .debug_struct("StaticRouterConfig")
                .field("version", &v.version)
                .field("subgraphs", &v.subgraphs.len())
                .finish(),
            Self::ListenerAddr(v) => f.debug_tuple("ListenerAddr").field(v).finish(),
            Self::GraphQLMetrics(v) => f.debug_tuple("GraphQLMetrics").field(v).finish(),
            Self::Metrics(v) => f.debug_tuple("Metrics").field(v).finish(),
            Self::Tracing(v) => f.debug_tuple("Tracing").field(v).finish(),
            Self::GraphQLWebUrl(v) => f.debug_tuple("GraphQLWebUrl").field(v).finish(),
        }
    }
}

/// GraphQL operation metrics export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphQLMetricsConfig {
    pub enabled: bool,
    pub collector_endpoint: String,
}

/// General service metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsConfig {
    pub name: String,
    pub version: String,
    pub open_telemetry: OpenTelemetry,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenTelemetry {
    pub enabled: bool,
}

/// Distributed tracing.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub enabled: bool,
    pub name: String,
    pub version: String,
    /// Fraction of traces sampled, in `[0, 1]`.
    pub sampler: f64,
    pub propagators: Vec<Propagator>,
}

/// Trace context propagation formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagator {
    TraceContext,
}
