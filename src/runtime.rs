//! The seam to the router runtime constructor.

use std::fmt;

use thiserror::Error;
use tracing::Dispatch;

use crate::config::{OverrideRoutingUrl, StaticRouterConfig};
use crate::directive::{Directive, GraphQLMetricsConfig, MetricsConfig, TracingConfig};

/// Constructs a running router from a resolved directive sequence.
///
/// Any `FnOnce(Vec<Directive>) -> Result<R, E>` is a builder, so a runtime
/// constructor can be passed as-is.
pub trait RouterBuilder {
    type Router;
    type Error: std::error::Error + Send + Sync + 'static;

    fn build(self, directives: Vec<Directive>) -> Result<Self::Router, Self::Error>;
}

impl<F, R, E> RouterBuilder for F
where
    F: FnOnce(Vec<Directive>) -> Result<R, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Router = R;
    type Error = E;

    fn build(self, directives: Vec<Directive>) -> Result<R, E> {
        self(directives)
    }
}

pub const DEFAULT_LISTENER_ADDR: &str = "localhost:3002";

/// Effective router settings after applying a directive sequence in order.
#[derive(Clone)]
pub struct RouterOptions {
    pub logger: Dispatch,
    pub aws_lambda_runtime: bool,
    pub graph_api_token: String,
    pub graphql_path: String,
    pub introspection: bool,
    pub playground: bool,
    pub playground_path: String,
    pub override_routing_url: OverrideRoutingUrl,
    pub static_config: Option<StaticRouterConfig>,
    pub listener_addr: String,
    pub graphql_metrics: Option<GraphQLMetricsConfig>,
    pub metrics: Option<MetricsConfig>,
    pub tracing: Option<TracingConfig>,
    /// Public GraphQL URL; the runtime falls back to `graphql_path` when unset.
    pub graphql_web_url: Option<String>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            logger: Dispatch::none(),
            aws_lambda_runtime: false,
            graph_api_token: String::new(),
            graphql_path: "/graphql".to_string(),
            introspection: false,
            playground: false,
            playground_path: "/".to_string(),
            override_routing_url: OverrideRoutingUrl::default(),
            static_config: None,
            listener_addr: DEFAULT_LISTENER_ADDR.to_string(),
            graphql_metrics: None,
            metrics: None,
            tracing: None,
            graphql_web_url: None,
        }
    }
}

impl fmt::Debug for RouterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterOptions")
            .field("aws_lambda_runtime", &self.aws_lambda_runtime)
            .field("graphql_path", &self.graphql_path)
            .field("introspection", &self.introspection)
            .field("playground", &self.playground)
            .field("playground_path", &self.playground_path)
            .field("override_routing_url", &self.override_routing_url)
            .field("static_config", &self.static_config.as_ref().map(|c| &c.version))
            .field("listener_addr", &self.listener_addr)
            .field("graphql_metrics", &self.graphql_metrics)
            .field("metrics", &self.metrics)
            .field("tracing", &self.tracing)
            .field("graphql_web_url", &self.graphql_web_url)
            .finish_non_exhaustive()
    }
}

impl RouterOptions {
    pub fn from_directives(directives: impl IntoIterator<Item = Directive>) -> Self {
        let mut options = Self::default();
        for directive in directives {
            options.apply(directive);
        }
        options
    }

    pub fn apply(&mut self, directive: Directive) {
        match directive {
            Directive::Logger(logger) => self.logger = logger,
            Directive::AwsLambdaRuntime => self.aws_lambda_runtime = true,
            Directive::GraphApiToken(token) => self.graph_api_token = token,
            Directive::GraphQLPath(path) => self.graphql_path = path,
            Directive::Introspection(enabled) => self.introspection = enabled,
            Directive::Playground(enabled) => self.playground = enabled,
            Directive::PlaygroundPath(path) => self.playground_path = path,
            Directive::OverrideRoutingUrl(urls) => self.override_routing_url = urls,
            Directive::StaticRouterConfig(config) => self.static_config = Some(*config),
            Directive::ListenerAddr(addr) => self.listener_addr = addr,
            Directive::GraphQLMetrics(config) => self.graphql_metrics = Some(config),
            Directive::Metrics(config) => self.metrics = Some(config),
            Directive::Tracing(config) => self.tracing = Some(config),
            Directive::GraphQLWebUrl(url) => self.graphql_web_url = Some(url),
        }
    }

    /// The public GraphQL URL the router advertises.
    pub fn effective_graphql_web_url(&self) -> &str {
        self.graphql_web_url.as_deref().unwrap_or(&self.graphql_path)
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RouterOptionsError {
    #[error("no static router config was provided")]
    MissingStaticConfig,
}

/// A [`RouterBuilder`] that folds directives into [`RouterOptions`].
///
/// Rejects a sequence without a static router config, as a runtime would.
#[derive(Debug, Default, Clone, Copy)]
pub struct OptionsBuilder;

impl RouterBuilder for OptionsBuilder {
    type Router = RouterOptions;
    type Error = RouterOptionsError;

    fn build(self, directives: Vec<Directive>) -> Result<RouterOptions, RouterOptionsError> {
        let options = RouterOptions::from_directives(directives);
        if options.static_config.is_none() {
            return Err(RouterOptionsError::MissingStaticConfig);
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn static_config(version: &str) -> Directive {
        Directive::StaticRouterConfig(Box::new(StaticRouterConfig {
            version: version.to_string(),
            engine_config: serde_json::Value::Null,
            subgraphs: Vec::new(),
        }))
    }

    #[test]
    fn test_later_directive_overrides() {
        let options = RouterOptions::from_directives([
            Directive::Playground(true),
            Directive::ListenerAddr(":80".into()),
            Directive::Playground(false),
        ]);
        assert!(!options.playground);
        assert_eq!(options.listener_addr, ":80");
    }

    #[test]
    fn test_web_url_falls_back_to_graphql_path() {
        let options = RouterOptions::from_directives([Directive::GraphQLPath("/api".into())]);
        assert_eq!(options.effective_graphql_web_url(), "/api");

        let options = RouterOptions::from_directives([
            Directive::GraphQLPath("/api".into()),
            Directive::GraphQLWebUrl("/prod/graphql".into()),
        ]);
        assert_eq!(options.effective_graphql_web_url(), "/prod/graphql");
    }

    #[test]
    fn test_options_builder_requires_static_config() {
        let result = OptionsBuilder.build(vec![Directive::AwsLambdaRuntime]);
        assert!(matches!(result, Err(RouterOptionsError::MissingStaticConfig)));

        let options = OptionsBuilder
            .build(vec![Directive::AwsLambdaRuntime, static_config("7")])
            .unwrap();
        assert!(options.aws_lambda_runtime);
        assert_eq!(options.static_config.unwrap().version, "7");
    }

    #[test]
    fn test_closure_builder() {
        let builder = |directives: Vec<Directive>| Ok::<_, RouterOptionsError>(directives.len());
        assert_eq!(builder.build(vec![Directive::AwsLambdaRuntime]).unwrap(), 1);
    }
}
