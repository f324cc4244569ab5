use crate::config::routes::RouteRules;
use crate::config::types::{ConfigFile, LoggingConfig, ResolvedConfig, ResolvedSite, SiteConfig};
use crate::navigation::default_menu;
use crate::videos::default_catalog;
use chrono::NaiveDate;
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("base_url '{0}' must start and end with '/'")]
    InvalidBaseUrl(String),

    #[error("compatibility_date '{0}' is not a YYYY-MM-DD date: {1}")]
    InvalidDate(String, #[source] chrono::ParseError),

    #[error("invalid route rule pattern '{0}': {1}")]
    InvalidRoutePattern(String, #[source] regex::Error),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        let origin = path.parent().unwrap_or_else(|| Path::new("."));
        let resolved = Self::resolve(cf, origin)?;
        debug!(
            path = %path.display(),
            content_dir = %resolved.content_dir.display(),
            "loaded site config"
        );
        Ok(resolved)
    }

    /// Validate a parsed config file; relative paths resolve against `origin`.
    pub fn resolve(cf: ConfigFile, origin: &Path) -> Result<ResolvedConfig, ConfigError> {
        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        let site_root = match &cf.site_root {
            Some(root) => origin.join(expand_path(root)?),
            None => origin.to_path_buf(),
        };
        let sub = |s: &str| s.replace("{{site_root}}", &site_root.to_string_lossy());

        let content_dir = match &cf.content_dir {
            Some(dir) => site_root.join(expand_path(&sub(dir))?),
            None => site_root.join("content"),
        };

        let site = resolve_site(&cf.site)?;

        // Resolve log file path if present
        let logging = match cf.logging.file {
            Some(ref file) => LoggingConfig {
                file: Some(site_root.join(expand_path(&sub(&file.to_string_lossy()))?)),
                ..cf.logging.clone()
            },
            None => cf.logging.clone(),
        };

        Ok(ResolvedConfig {
            site_root,
            content_dir,
            site,
            logging,
            menu: cf.menu.unwrap_or_else(default_menu),
            videos: cf.videos.unwrap_or_else(default_catalog),
        })
    }
}

/// Configuration used when no config file exists: built-in data, `./content`.
impl Default for ResolvedConfig {
    fn default() -> Self {
        let site = SiteConfig::default();
        Self {
            site_root: PathBuf::from("."),
            content_dir: PathBuf::from("./content"),
            site: ResolvedSite {
                // Defaults are known-valid literals.
                compatibility_date: NaiveDate::from_ymd_opt(2025, 7, 15).unwrap_or_default(),
                route_rules: RouteRules::compile(&site.route_rules).unwrap_or_default(),
                base_url: site.base_url,
                devtools: site.devtools,
                modules: site.modules,
                css: site.css,
                image_provider: site.image_provider,
                ssr: site.ssr,
                nitro_preset: site.nitro_preset,
            },
            logging: LoggingConfig::default(),
            menu: default_menu(),
            videos: default_catalog(),
        }
    }
}

fn resolve_site(site: &SiteConfig) -> Result<ResolvedSite, ConfigError> {
    if !site.base_url.starts_with('/') || !site.base_url.ends_with('/') {
        return Err(ConfigError::InvalidBaseUrl(site.base_url.clone()));
    }

    let compatibility_date = NaiveDate::parse_from_str(&site.compatibility_date, "%Y-%m-%d")
        .map_err(|e| ConfigError::InvalidDate(site.compatibility_date.clone(), e))?;

    let route_rules = RouteRules::compile(&site.route_rules)
        .map_err(|(pattern, e)| ConfigError::InvalidRoutePattern(pattern, e))?;

    Ok(ResolvedSite {
        compatibility_date,
        base_url: site.base_url.clone(),
        devtools: site.devtools,
        modules: site.modules.clone(),
        css: site.css.clone(),
        image_provider: site.image_provider.clone(),
        ssr: site.ssr,
        nitro_preset: site.nitro_preset.clone(),
        route_rules,
    })
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("helpsite").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("helpsite").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
