//! Startup configuration for a GraphQL router hosted on AWS Lambda.
//!
//! Callers describe what they want with [`RouterOption`]s. These are folded
//! into [`Settings`], resolved into an ordered list of [`Directive`]s, and
//! handed to a [`RouterBuilder`]:
//!
//! ```no_run
//! use lambda_router_config::options::{with_enable_telemetry, with_http_port, with_stage};
//! use lambda_router_config::{new_router, OptionsBuilder};
//!
//! let router = new_router(
//!     OptionsBuilder,
//!     [with_http_port("8080"), with_enable_telemetry(true), with_stage("v1")],
//! )?;
//! assert_eq!(router.effective_graphql_web_url(), "/v1/graphql");
//! # Ok::<(), lambda_router_config::Error>(())
//! ```

pub mod config;
pub mod directive;
mod error;
pub mod options;
pub mod resolver;
pub mod runtime;

pub use config::ConfigError;
pub use directive::Directive;
pub use error::Error;
pub use options::{RouterOption, Settings};
pub use resolver::{new_router, resolve};
pub use runtime::{OptionsBuilder, RouterBuilder, RouterOptions};
