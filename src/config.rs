use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Placeholder origin for pages that were not fetched from the web
pub const FALLBACK_BASE_URL: &str = "http://fakehost.com";

/// Reader configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ReaderConfig {
    /// Base URL used for files, literal HTML and stdin
    #[serde(default = "default_fallback_base_url")]
    pub fallback_base_url: String,
    /// Outbound fetch settings
    #[serde(default)]
    pub fetch: FetchConfig,
    /// HTML minifier settings
    #[serde(default)]
    pub minify: MinifyConfig,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fallback_base_url: default_fallback_base_url(),
            fetch: FetchConfig::default(),
            minify: MinifyConfig::default(),
        }
    }
}

/// Configuration for fetching pages by URL
#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds. Unset means requests never time out.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Configuration for the HTML minifier
#[derive(Debug, Deserialize, Clone)]
pub struct MinifyConfig {
    /// Keep HTML comments in the output
    #[serde(default)]
    pub keep_comments: bool,
    /// Minify inline `<style>` and `style` attributes
    #[serde(default = "default_true")]
    pub minify_css: bool,
    /// Minify inline `<script>` contents
    #[serde(default = "default_true")]
    pub minify_js: bool,
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            keep_comments: false,
            minify_css: true,
            minify_js: true,
        }
    }
}

// Default value functions
fn default_fallback_base_url() -> String {
    FALLBACK_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    concat!("Mozilla/5.0 (compatible; readability-cli/", env!("CARGO_PKG_VERSION"), ")").to_string()
}

fn default_true() -> bool {
    true
}

impl ReaderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with READABILITY__ prefix
    /// 2. readability.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: READABILITY__FETCH__TIMEOUT_SECS
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ReaderConfig::load`] for the layering order.
pub fn load_config() -> Result<ReaderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("readability").required(false))
        // Use double underscore for nested: READABILITY__MINIFY__KEEP_COMMENTS
        .add_source(
            Environment::with_prefix("READABILITY")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
