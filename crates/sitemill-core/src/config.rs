//! Sitemap configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    base_url::BaseUrl,
    error::{CoreError, Result},
};

/// Maximum number of URLs per sitemap and sitemaps per index allowed by the
/// sitemaps.org protocol.
pub const PROTOCOL_MAX_ITEMS: usize = 50_000;

/// Main configuration structure for sitemill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Pagination limits.
    #[serde(default)]
    pub limits: Limits,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// URL every sitemap `loc` is resolved against
    /// (e.g. "https://example.com/sitemaps/").
    pub base_url: String,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory sitemap pages and indexes are written to.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

/// Per-run pagination thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum number of URLs in one sitemap page.
    #[serde(default = "default_per_map")]
    pub per_map: usize,

    /// Maximum number of sitemap pages referenced by one index.
    #[serde(default = "default_per_index")]
    pub per_index: usize,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("sitemaps")
}

fn default_per_map() -> usize {
    PROTOCOL_MAX_ITEMS
}

fn default_per_index() -> usize {
    PROTOCOL_MAX_ITEMS
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            per_map: default_per_map(),
            per_index: default_per_index(),
        }
    }
}

impl Limits {
    /// Create validated limits.
    pub fn new(per_map: usize, per_index: usize) -> Result<Self> {
        let limits = Self { per_map, per_index };
        limits.validate()?;
        Ok(limits)
    }

    /// Both thresholds must allow at least one item.
    pub fn validate(&self) -> Result<()> {
        if self.per_map == 0 {
            return Err(CoreError::config("limits.per_map must be at least 1"));
        }
        if self.per_index == 0 {
            return Err(CoreError::config("limits.per_index must be at least 1"));
        }
        Ok(())
    }
}

impl Config {
    /// Create a configuration for `base_url` with default output and limits.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            site: SiteConfig {
                base_url: base_url.into(),
            },
            output: OutputConfig::default(),
            limits: Limits::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        self.base_url().map_err(|e| {
            CoreError::config_with_source(
                format!("site.base_url is not usable: {}", self.site.base_url),
                e,
            )
        })?;

        self.limits.validate()
    }

    /// Parsed base URL.
    pub fn base_url(&self) -> Result<BaseUrl> {
        BaseUrl::parse(&self.site.base_url)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
base_url = "https://example.com/sitemaps/"

[output]
dir = "public/sitemaps"

[limits]
per_map = 1000
per_index = 20
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("sitemill.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.base_url, "https://example.com/sitemaps/");
        assert_eq!(config.output.dir, PathBuf::from("public/sitemaps"));
        assert_eq!(config.limits, Limits::new(1000, 20).unwrap());
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("sitemill.toml");
        let minimal_config = r#"
[site]
base_url = "https://example.com/"
"#;
        std::fs::write(&config_path, minimal_config).expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.output.dir, PathBuf::from("sitemaps"));
        assert_eq!(config.limits.per_map, 50_000);
        assert_eq!(config.limits.per_index, 50_000);
    }

    #[test]
    fn test_partial_limits_fall_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
[site]
base_url = "https://example.com/"

[limits]
per_map = 10
"#,
        )
        .expect("parse");

        assert_eq!(config.limits.per_map, 10);
        assert_eq!(config.limits.per_index, PROTOCOL_MAX_ITEMS);
    }

    #[test]
    fn test_config_validation_empty_base_url() {
        let config = Config::new("");
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("base_url cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_unparseable_base_url() {
        let config = Config::new("example.com/sitemaps/");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("not usable"));
    }

    #[test]
    fn test_config_validation_zero_limits() {
        let mut config = Config::new("https://example.com/");
        config.limits.per_map = 0;
        assert!(config.validate().unwrap_err().to_string().contains("per_map"));

        config.limits.per_map = 5;
        config.limits.per_index = 0;
        assert!(
            config
                .validate()
                .unwrap_err()
                .to_string()
                .contains("per_index")
        );
    }

    #[test]
    fn test_limits_new_rejects_zero() {
        assert!(Limits::new(0, 1).is_err());
        assert!(Limits::new(1, 0).is_err());
        assert!(Limits::new(1, 1).is_ok());
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/sitemill.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_config_parse_failure() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("sitemill.toml");
        std::fs::write(&config_path, "[site\nbase_url = 1").expect("write");

        let err = Config::load(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
