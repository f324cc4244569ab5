pub mod doctor;
pub mod extract;
pub mod index;
pub mod menu;
pub mod output;
pub mod search;
pub mod videos;

use helpsite_core::config::{ConfigLoader, ResolvedConfig, default_config_path};
use std::path::Path;
use tracing::debug;

/// Load the site config, falling back to built-in defaults only when no
/// `--config` was given and the default file does not exist.
pub fn load_config(config: Option<&Path>) -> ResolvedConfig {
    if config.is_none() && !default_config_path().exists() {
        debug!("no config file at {}, using defaults", default_config_path().display());
        return ResolvedConfig::default();
    }

    match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            crate::logging::flush();
            std::process::exit(1);
        }
    }
}
