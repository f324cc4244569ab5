//! Site configuration: TOML file format, loading and resolution.

pub mod loader;
pub mod routes;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use routes::RouteRules;
pub use types::{ConfigFile, LoggingConfig, ResolvedConfig, ResolvedSite, RouteRule, SiteConfig};
