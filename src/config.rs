use crate::formatter::FormatOptions;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level scraper configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScraperConfig {
    /// HTTP fetch settings
    #[serde(default)]
    pub http: HttpConfig,
    /// Markdown rendering settings
    #[serde(default)]
    pub format: FormatOptions,
}

/// Settings for fetching recipe pages
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Accept header
    #[serde(default = "default_accept")]
    pub accept: String,
    /// Accept-Language header
    #[serde(default = "default_accept_language")]
    pub accept_language: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            accept: default_accept(),
            accept_language: default_accept_language(),
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_accept() -> String {
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string()
}

fn default_accept_language() -> String {
    "en-US,en;q=0.9".to_string()
}

impl ScraperConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SCRAPER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SCRAPER__HTTP__TIMEOUT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ScraperConfig::load`] for the lookup order.
pub fn load_config() -> Result<ScraperConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_SCRAPER__FORMAT__INCLUDE_TIME
        .add_source(
            Environment::with_prefix("RECIPE_SCRAPER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_values() {
        let config = ScraperConfig::default();
        assert_eq!(config.http.timeout, 30);
        assert!(config.http.user_agent.contains("Chrome/120"));
        assert_eq!(config.http.accept_language, "en-US,en;q=0.9");
        assert!(config.format.include_time);
        assert!(config.format.include_yield);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ScraperConfig = Config::builder()
            .add_source(File::from_str(
                "[http]\ntimeout = 5\n\n[format]\ninclude_time = false\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.http.timeout, 5);
        assert_eq!(config.http.accept, default_accept());
        assert!(!config.format.include_time);
        assert!(config.format.include_yield);
    }
}
