//! Tinta configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tinta_theme::ThemeConfig;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "tinta.toml";

/// Top-level Tinta configuration (tinta.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TintaConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub state: StateConfig,
}

/// Where the persisted selection lives
#[derive(Debug, Deserialize, Serialize)]
pub struct StateConfig {
    /// JSON key-value file holding the selected theme id
    #[serde(default = "default_state_path")]
    pub path: PathBuf,
}

fn default_state_path() -> PathBuf {
    PathBuf::from(".tinta").join("state.json")
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: default_state_path(),
        }
    }
}

impl TintaConfig {
    /// Load configuration from a file.
    ///
    /// Relative paths inside the file are resolved against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut config: TintaConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Load `tinta.toml` from `dir` if present, otherwise use defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "using config file");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        if let Some(catalog) = self.theme.catalog.as_mut() {
            if catalog.is_relative() {
                *catalog = base.join(&*catalog);
            }
        }
        if self.state.path.is_relative() {
            self.state.path = base.join(&self.state.path);
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TintaConfig::discover(dir.path()).unwrap();
        assert_eq!(config.theme, ThemeConfig::default());
        assert_eq!(config.state.path, PathBuf::from(".tinta/state.json"));
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
[theme]
default_theme = "dark"
catalog = "themes.toml"

[state]
path = "state/theme.json"
"#,
        )
        .unwrap();

        let config = TintaConfig::discover(dir.path()).unwrap();
        assert_eq!(config.theme.default_theme, "dark");
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.theme.catalog, Some(dir.path().join("themes.toml")));
        assert_eq!(config.state.path, dir.path().join("state/theme.json"));
    }

    #[test]
    fn test_parse_error_mentions_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[theme\n").unwrap();
        let err = TintaConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_round_trip() {
        let text = TintaConfig::default().to_toml().unwrap();
        let parsed: TintaConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.theme, ThemeConfig::default());
    }
}
