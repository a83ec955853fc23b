//! Resolution of [`Settings`] into the directive sequence for the runtime.
//!
//! The sequence is assembled in a fixed order:
//!
//! 1. caller-supplied extra directives, verbatim
//! 2. logger and AWS Lambda runtime marker
//! 3. either the companion config file's settings, or the zero-config
//!    defaults (playground, introspection, caller token) when no companion
//!    path was given
//! 4. the static router config
//! 5. listener address, if a port was given
//! 6. GraphQL metrics, metrics and tracing, if telemetry is enabled
//! 7. public GraphQL URL, if a stage was given
//!
//! Later directives override earlier ones inside the runtime, so the resolved
//! directives take precedence over the caller's extras.
//!
//! Any load or construction failure is fatal: it is logged through the
//! settings' logger and returned, and nothing is handed to the runtime.

use tracing::{debug, dispatcher, error, warn};

use crate::config::{load_companion_config, load_router_config};
use crate::directive::{
    Directive, GraphQLMetricsConfig, MetricsConfig, OpenTelemetry, Propagator, TracingConfig,
    BUILD_VERSION, METRICS_COLLECTOR_ENDPOINT,
};
use crate::options::{RouterOption, Settings};
use crate::runtime::RouterBuilder;
use crate::Error;

/// Static router config path used when neither the caller nor the companion
/// file names one.
pub const DEFAULT_ROUTER_CONFIG_PATH: &str = "router.json";

/// Suffix of the public GraphQL URL, after the stage prefix.
pub const GRAPHQL_URL_SUFFIX: &str = "/graphql";

/// Folds `options`, resolves them and constructs the router with `builder`.
///
/// The builder is only called once resolution succeeded.
pub fn new_router<B: RouterBuilder>(
    builder: B,
    options: impl IntoIterator<Item = RouterOption>,
) -> Result<B::Router, Error> {
    let settings = Settings::from_options(options);
    let directives = resolve(&settings)?;

    dispatcher::with_default(&settings.logger, || {
        builder.build(directives).map_err(|e| {
            error!(error = %e, "could not create router");
            Error::Construct(Box::new(e))
        })
    })
}

/// Resolves `settings` into the ordered directive sequence.
///
/// Log records go to `settings.logger` only.
pub fn resolve(settings: &Settings) -> Result<Vec<Directive>, Error> {
    dispatcher::with_default(&settings.logger, || {
        resolve_directives(settings).inspect_err(log_fatal)
    })
}

fn resolve_directives(settings: &Settings) -> Result<Vec<Directive>, Error> {
    let mut directives = settings.router_directives.clone();

    directives.push(Directive::Logger(settings.logger.clone()));
    directives.push(Directive::AwsLambdaRuntime);

    let router_config_override = match &settings.config_path {
        Some(path) => apply_companion_config(path, &mut directives)?,
        None => {
            debug!("no config file given, using lambda defaults");
            apply_lambda_defaults(settings, &mut directives);
            None
        }
    };

    let router_config_path = router_config_override
        .or_else(|| settings.router_config_path.clone())
        .unwrap_or_else(|| DEFAULT_ROUTER_CONFIG_PATH.to_string());
    let router_config =
        load_router_config(&router_config_path).map_err(|source| Error::RouterConfig {
            path: router_config_path.clone().into(),
            source,
        })?;
    debug!(path = %router_config_path, version = %router_config.version, "loaded router config");
    directives.push(Directive::StaticRouterConfig(Box::new(router_config)));

    if let Some(port) = &settings.http_port {
        directives.push(Directive::ListenerAddr(format!(":{port}")));
    }

    if settings.enable_telemetry {
        directives.extend(telemetry_directives(settings));
    }

    if let Some(stage) = &settings.stage {
        directives.push(Directive::GraphQLWebUrl(format!(
            "/{stage}{GRAPHQL_URL_SUFFIX}"
        )));
    }

    debug!(count = directives.len(), "resolved router directives");
    Ok(directives)
}

/// Appends the companion file's settings. Returns its router config path
/// override, if it names one.
fn apply_companion_config(
    path: &str,
    directives: &mut Vec<Directive>,
) -> Result<Option<String>, Error> {
    let config = load_companion_config(path).map_err(|source| Error::CompanionConfig {
        path: path.into(),
        source,
    })?;
    debug!(path, "loaded config file");

    directives.extend([
        Directive::GraphApiToken(config.graph.token),
        Directive::GraphQLPath(config.graphql_path),
        Directive::Introspection(config.introspection_enabled),
        Directive::Playground(config.playground_enabled),
        Directive::PlaygroundPath(config.playground_path),
        Directive::OverrideRoutingUrl(config.override_routing_url),
    ]);

    Ok(config.router_config_path.filter(|p| !p.is_empty()))
}

fn apply_lambda_defaults(settings: &Settings, directives: &mut Vec<Directive>) {
    directives.extend([
        Directive::Playground(true),
        Directive::Introspection(true),
        Directive::GraphApiToken(settings.graph_api_token.clone().unwrap_or_default()),
    ]);
}

fn telemetry_directives(settings: &Settings) -> [Directive; 3] {
    let rate = settings.trace_sample_rate;
    if !(0.0..=1.0).contains(&rate) {
        warn!(rate, "trace sample rate outside [0, 1]");
    }

    [
        Directive::GraphQLMetrics(GraphQLMetricsConfig {
            enabled: true,
            collector_endpoint: METRICS_COLLECTOR_ENDPOINT.to_string(),
        }),
        Directive::Metrics(MetricsConfig {
            name: settings.telemetry_service_name.clone(),
            version: BUILD_VERSION.to_string(),
            open_telemetry: OpenTelemetry { enabled: true },
        }),
        Directive::Tracing(TracingConfig {
            enabled: true,
            name: settings.telemetry_service_name.clone(),
            version: BUILD_VERSION.to_string(),
            sampler: rate,
            propagators: vec![Propagator::TraceContext],
        }),
    ]
}

fn log_fatal(err: &Error) {
    let message = match err {
        Error::CompanionConfig { .. } => "could not load config",
        Error::RouterConfig { .. } => "could not read router config",
        _ => "could not resolve router directives",
    };
    match err.path() {
        Some(path) => error!(path = %path.display(), error = %err, "{message}"),
        None => error!(error = %err, "{message}"),
    }
}
