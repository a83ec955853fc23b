//! Loading of the companion config file and the static router config.

mod companion;
mod error;
mod expand;
mod file;
mod router;

pub use companion::{CompanionConfig, GraphConfig, OverrideRoutingUrl};
pub use error::ConfigError;
pub use file::{load_companion_config, load_router_config};
pub use router::{StaticRouterConfig, Subgraph};
