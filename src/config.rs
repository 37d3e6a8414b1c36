use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::PathBuf;

/// What a multi-source build does when one source cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceErrorPolicy {
    /// Stop the whole run on the first unreadable source
    #[default]
    Abort,
    /// Log the failing source and continue with the rest
    Skip,
}

/// A named cookbook taking part in the master site build
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    /// Display name used for attribution and "also found in" references
    pub name: String,
    /// Path to the document's page dump
    pub path: PathBuf,
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CookbookConfig {
    /// Root directory for all generated artifacts
    pub output_dir: PathBuf,
    /// Directory (relative to the output) receiving per-recipe extracts
    pub split_dir: String,
    /// Directory (relative to the output) receiving the per-document HTML export
    pub html_dir: String,
    /// Directory (relative to the output) receiving the master site
    pub site_dir: String,
    /// Heading shown on the master site's index page
    pub site_title: String,
    /// Policy for unreadable sources in a master build
    pub on_source_error: SourceErrorPolicy,
    /// Sources for the master build
    pub sources: Vec<SourceConfig>,
}

impl Default for CookbookConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            split_dir: default_split_dir(),
            html_dir: "html".to_string(),
            site_dir: "site".to_string(),
            site_title: default_site_title(),
            on_source_error: SourceErrorPolicy::default(),
            sources: Vec::new(),
        }
    }
}

pub(crate) fn default_split_dir() -> String {
    "SplitRecipes".to_string()
}

pub(crate) fn default_site_title() -> String {
    "Master Recipe Index".to_string()
}

impl CookbookConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COOKBOOK__ prefix
    /// 2. cookbook.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COOKBOOK__OUTPUT_DIR
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Parse configuration from TOML text, still honouring environment overrides
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        finish(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }
}

/// Load configuration from `cookbook.toml` and `COOKBOOK__*` environment variables
pub fn load_config() -> Result<CookbookConfig, ConfigError> {
    // Optional config file (can be missing)
    finish(Config::builder().add_source(File::with_name("cookbook").required(false)))
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<CookbookConfig, ConfigError> {
    builder
        .add_source(
            Environment::with_prefix("COOKBOOK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = CookbookConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.split_dir, "SplitRecipes");
        assert_eq!(config.html_dir, "html");
        assert_eq!(config.site_dir, "site");
        assert_eq!(config.site_title, "Master Recipe Index");
        assert_eq!(config.on_source_error, SourceErrorPolicy::Abort);
        assert!(config.sources.is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CookbookConfig::from_toml_str(
            r#"
            site_dir = "public"
            on_source_error = "skip"
            "#,
        )
        .unwrap();

        assert_eq!(config.site_dir, "public");
        assert_eq!(config.on_source_error, SourceErrorPolicy::Skip);
        assert_eq!(config.split_dir, "SplitRecipes");
    }

    #[test]
    fn test_sources_table() {
        let config = CookbookConfig::from_toml_str(
            r#"
            [[sources]]
            name = "Grandma"
            path = "books/grandma.json"

            [[sources]]
            name = "Bistro"
            path = "books/bistro.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.sources[0].name, "Grandma");
        assert_eq!(config.sources[1].path, PathBuf::from("books/bistro.json"));
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result = CookbookConfig::from_toml_str(r#"on_source_error = "retry""#);
        assert!(result.is_err());
    }
}
