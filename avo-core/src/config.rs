//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the avo.yml schema
///
/// Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub routes: RoutesConfig,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_title() -> String {
    String::from("Het Archief voor Onderwijs")
}

fn default_base_url() -> String {
    String::from("/")
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// YAML dictionary overriding the built-in Dutch messages
    #[serde(default)]
    pub translations: Option<PathBuf>,
}

/// Path templates of the learner-facing app, `:name` marks a parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "default_item_route")]
    pub item: String,

    #[serde(default = "default_collection_route")]
    pub collection: String,

    #[serde(default = "default_bundle_route")]
    pub bundle: String,

    #[serde(default = "default_search_route")]
    pub search: String,
}

fn default_item_route() -> String {
    String::from("/item/:id")
}

fn default_collection_route() -> String {
    String::from("/collecties/:id")
}

fn default_bundle_route() -> String {
    String::from("/bundels/:id")
}

fn default_search_route() -> String {
    String::from("/zoeken")
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            item: default_item_route(),
            collection: default_collection_route(),
            bundle: default_bundle_route(),
            search: default_search_route(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Get the translations file, resolved relative to config file
    pub fn translations_path(&self) -> Option<PathBuf> {
        self.paths.translations.as_ref().map(|p| self.resolve_path(p))
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match self.config_path.as_ref().and_then(|p| p.parent()) {
            Some(parent) => parent.join(path),
            None => path.to_path_buf(),
        }
    }
}

/// Ensure base URLs have a leading and trailing slash
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    let collapsed = trimmed
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if collapsed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", collapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.routes.item, "/item/:id");
        assert!(config.translations_path().is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str(
            r#"
site:
  title: "Onderwijs"
routes:
  item: "/items/:id"
"#,
        )
        .unwrap();

        assert_eq!(config.site.title, "Onderwijs");
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.routes.item, "/items/:id");
        assert_eq!(config.routes.collection, "/collecties/:id");
    }

    #[test]
    fn test_paths_resolve_relative_to_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("avo.yml");
        fs::write(
            &path,
            "paths:\n  translations: i18n/nl.yml\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(
            config.translations_path(),
            Some(dir.path().join("i18n/nl.yml"))
        );
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::from_file_or_default(dir.path().join("absent.yml")).unwrap();
        assert_eq!(config.site.title, "Het Archief voor Onderwijs");
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url(""), "/");
        assert_eq!(normalize_base_url("onderwijs"), "/onderwijs/");
        assert_eq!(normalize_base_url("//a//b/"), "/a/b/");
    }
}
