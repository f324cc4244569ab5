use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::routes::RouteRules;
use crate::navigation::MenuItem;
use crate::videos::VideoCategory;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    /// Root of the site sources (defaults to the config file's directory).
    pub site_root: Option<String>,
    /// Markdown content directory (supports `{{site_root}}`).
    pub content_dir: Option<String>,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Replaces the built-in sidebar when present.
    pub menu: Option<Vec<MenuItem>>,
    /// Replaces the built-in video catalog when present.
    pub videos: Option<Vec<VideoCategory>>,
}

/// Build-level settings for the static site.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_compatibility_date")]
    pub compatibility_date: String,
    /// Deployment prefix, e.g. "/help/" when served from a sub-path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_true")]
    pub devtools: bool,
    #[serde(default = "default_modules")]
    pub modules: Vec<String>,
    #[serde(default = "default_css")]
    pub css: Vec<String>,
    #[serde(default = "default_image_provider")]
    pub image_provider: String,
    #[serde(default = "default_true")]
    pub ssr: bool,
    #[serde(default = "default_nitro_preset")]
    pub nitro_preset: String,
    #[serde(default = "default_route_rules")]
    pub route_rules: BTreeMap<String, RouteRule>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            compatibility_date: default_compatibility_date(),
            base_url: default_base_url(),
            devtools: true,
            modules: default_modules(),
            css: default_css(),
            image_provider: default_image_provider(),
            ssr: true,
            nitro_preset: default_nitro_preset(),
            route_rules: default_route_rules(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteRule {
    #[serde(default)]
    pub prerender: bool,
}

fn default_compatibility_date() -> String {
    "2025-07-15".to_string()
}

fn default_base_url() -> String {
    "/".to_string()
}

fn default_true() -> bool {
    true
}

fn default_modules() -> Vec<String> {
    ["@nuxt/content", "@nuxt/hints", "@nuxt/image", "@nuxt/ui", "@tresjs/nuxt", "nuxt-lottie"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_css() -> Vec<String> {
    vec!["~/assets/css/main.css".to_string()]
}

fn default_image_provider() -> String {
    "none".to_string()
}

fn default_nitro_preset() -> String {
    "static".to_string()
}

fn default_route_rules() -> BTreeMap<String, RouteRule> {
    BTreeMap::from([("/**".to_string(), RouteRule { prerender: true })])
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Site settings after validation.
#[derive(Debug, Clone)]
pub struct ResolvedSite {
    pub compatibility_date: NaiveDate,
    pub base_url: String,
    pub devtools: bool,
    pub modules: Vec<String>,
    pub css: Vec<String>,
    pub image_provider: String,
    pub ssr: bool,
    pub nitro_preset: String,
    pub route_rules: RouteRules,
}

impl ResolvedSite {
    /// Whether `route` is pre-rendered at build time.
    pub fn should_prerender(&self, route: &str) -> bool {
        self.route_rules.rule_for(route).is_some_and(|r| r.prerender)
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub site_root: PathBuf,
    pub content_dir: PathBuf,
    pub site: ResolvedSite,
    pub logging: LoggingConfig,
    pub menu: Vec<MenuItem>,
    pub videos: Vec<VideoCategory>,
}
