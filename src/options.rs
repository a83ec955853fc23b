//! Caller-supplied router options, folded into a [`Settings`] record.
//!
//! Each [`RouterOption`] sets one logical field. Options are applied in the
//! order given; when two options touch the same field the later one wins.
//!
//! ```
//! use lambda_router_config::options::{with_http_port, with_stage, Settings};
//!
//! let settings = Settings::from_options([
//!     with_http_port("3002"),
//!     with_stage("dev"),
//!     with_stage("prod"),
//! ]);
//!
//! assert_eq!(settings.http_port.as_deref(), Some("3002"));
//! assert_eq!(settings.stage.as_deref(), Some("prod"));
//! ```

use std::fmt;

use tracing::Dispatch;

use crate::directive::Directive;

/// Service name used for metrics and traces unless overridden.
pub const DEFAULT_TELEMETRY_SERVICE_NAME: &str = "lambda-router";

/// Trace sample rate used unless overridden.
pub const DEFAULT_TRACE_SAMPLE_RATE: f64 = 1.0;

/// Everything the caller asked for, before resolution.
///
/// Optional string fields are `None` when unset; setters treat an empty
/// string as unset.
#[derive(Clone)]
pub struct Settings {
    pub router_config_path: Option<String>,
    pub config_path: Option<String>,
    pub telemetry_service_name: String,
    /// Extra directives handed to the runtime verbatim.
    pub router_directives: Vec<Directive>,
    pub graph_api_token: Option<String>,
    pub http_port: Option<String>,
    pub stage: Option<String>,
    pub enable_telemetry: bool,
    pub trace_sample_rate: f64,
    /// No-op dispatch unless a logger option was applied.
    pub logger: Dispatch,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            router_config_path: None,
            config_path: None,
            telemetry_service_name: DEFAULT_TELEMETRY_SERVICE_NAME.to_string(),
            router_directives: Vec::new(),
            graph_api_token: None,
            http_port: None,
            stage: None,
            enable_telemetry: false,
            trace_sample_rate: DEFAULT_TRACE_SAMPLE_RATE,
            logger: Dispatch::none(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("router_config_path", &self.router_config_path)
            .field("config_path", &self.config_path)
            .field("telemetry_service_name", &self.telemetry_service_name)
            .field("router_directives", &self.router_directives)
            .field("graph_api_token", &self.graph_api_token.as_ref().map(|_| "***"))
            .field("http_port", &self.http_port)
            .field("stage", &self.stage)
            .field("enable_telemetry", &self.enable_telemetry)
            .field("trace_sample_rate", &self.trace_sample_rate)
            .finish_non_exhaustive()
    }
}

impl Settings {
    /// Applies `options` in order to a default record.
    pub fn from_options(options: impl IntoIterator<Item = RouterOption>) -> Self {
        let mut settings = Self::default();
        for option in options {
            settings.apply(option);
        }
        settings
    }

    pub fn apply(&mut self, option: RouterOption) {
        (option.0)(self);
    }
}

/// A single mutation of [`Settings`].
#[must_use = "options do nothing until applied to Settings"]
pub struct RouterOption(Box<dyn FnOnce(&mut Settings) + Send>);

impl RouterOption {
    /// Wraps an arbitrary mutation.
    pub fn new(f: impl FnOnce(&mut Settings) + Send + 'static) -> Self {
        Self(Box::new(f))
    }
}

impl fmt::Debug for RouterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RouterOption(..)")
    }
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    Some(value.into()).filter(|s| !s.is_empty())
}

/// Path of the static router config (JSON). Defaults to `router.json`.
pub fn with_router_config_path(path: impl Into<String>) -> RouterOption {
    let path = non_empty(path);
    RouterOption::new(move |s| s.router_config_path = path)
}

/// Path of the companion config file. Once set, the file must load.
pub fn with_config_path(path: impl Into<String>) -> RouterOption {
    let path = non_empty(path);
    RouterOption::new(move |s| s.config_path = path)
}

pub fn with_telemetry_service_name(name: impl Into<String>) -> RouterOption {
    let name = name.into();
    RouterOption::new(move |s| s.telemetry_service_name = name)
}

/// Appends extra runtime directives. Unlike other options this accumulates.
pub fn with_router_directives(directives: impl IntoIterator<Item = Directive>) -> RouterOption {
    let directives: Vec<Directive> = directives.into_iter().collect();
    RouterOption::new(move |s| s.router_directives.extend(directives))
}

pub fn with_graph_api_token(token: impl Into<String>) -> RouterOption {
    let token = non_empty(token);
    RouterOption::new(move |s| s.graph_api_token = token)
}

pub fn with_http_port(port: impl Into<String>) -> RouterOption {
    let port = non_empty(port);
    RouterOption::new(move |s| s.http_port = port)
}

pub fn with_enable_telemetry(enable: bool) -> RouterOption {
    RouterOption::new(move |s| s.enable_telemetry = enable)
}

/// Deployment stage; prefixes the public GraphQL URL with `/<stage>`.
pub fn with_stage(stage: impl Into<String>) -> RouterOption {
    let stage = non_empty(stage);
    RouterOption::new(move |s| s.stage = stage)
}

pub fn with_trace_sample_rate(rate: f64) -> RouterOption {
    RouterOption::new(move |s| s.trace_sample_rate = rate)
}

pub fn with_logger(logger: impl Into<Dispatch>) -> RouterOption {
    let logger = logger.into();
    RouterOption::new(move |s| s.logger = logger)
}
