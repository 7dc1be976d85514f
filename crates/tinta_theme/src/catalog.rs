//! Ordered, validated theme catalog

use crate::presets::builtin_themes;
use crate::theme::{Theme, ThemeMode};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Catalog construction errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("theme catalog is empty")]
    Empty,
    #[error("duplicate theme id {0:?}")]
    DuplicateId(String),
    #[error("theme catalog has no {0} theme")]
    MissingMode(ThemeMode),
    #[error("failed to read theme catalog {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse theme catalog")]
    Parse(#[from] toml::de::Error),
}

/// On-disk catalog layout (`[[themes]]` tables)
#[derive(Debug, Deserialize, Serialize)]
struct CatalogFile {
    themes: Vec<Theme>,
}

/// The authoritative, read-only set of themes.
///
/// Order is display order. Ids are unique, and there is at least one theme
/// of each mode.
#[derive(Clone, Debug)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
    index: FxHashMap<String, usize>,
}

impl ThemeCatalog {
    /// Build a catalog, validating its invariants
    pub fn new(themes: Vec<Theme>) -> Result<Self, CatalogError> {
        if themes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = FxHashMap::default();
        for (i, theme) in themes.iter().enumerate() {
            if index.insert(theme.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(theme.id.clone()));
            }
        }

        for mode in ThemeMode::ALL {
            if !themes.iter().any(|t| t.mode == mode) {
                return Err(CatalogError::MissingMode(mode));
            }
        }

        Ok(Self { themes, index })
    }

    /// The built-in catalog
    pub fn builtin() -> Self {
        let themes = builtin_themes();
        let index = themes
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.clone(), i))
            .collect();
        Self { themes, index }
    }

    /// Parse a catalog from a TOML document with `[[themes]]` entries
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::new(file.themes)
    }

    /// Load a catalog from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self, CatalogError> {
        let source = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&source)?;
        tracing::debug!(
            path = %path.display(),
            themes = catalog.len(),
            "loaded theme catalog"
        );
        Ok(catalog)
    }

    /// All themes in display order
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.index.get(id).map(|&i| &self.themes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// First theme in display order
    pub fn first(&self) -> &Theme {
        // Non-empty by construction
        &self.themes[0]
    }

    /// First theme of `mode` in display order
    pub fn first_of_mode(&self, mode: ThemeMode) -> Option<&Theme> {
        self.themes.iter().find(|t| t.mode == mode)
    }

    /// Themes of `mode`, in display order
    pub fn by_mode(&self, mode: ThemeMode) -> Vec<&Theme> {
        self.themes.iter().filter(|t| t.mode == mode).collect()
    }

    /// The opposite-mode theme sharing the same brand colors as `id`.
    ///
    /// Returns `None` if `id` is unknown or no such theme exists.
    pub fn sibling_of(&self, id: &str) -> Option<&Theme> {
        let theme = self.get(id)?;
        let mode = theme.mode.toggle();
        self.themes
            .iter()
            .find(|t| t.mode == mode && t.colors == theme.colors)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|t| t.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Serialize the catalog back to its TOML form
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&CatalogFile {
            themes: self.themes.clone(),
        })
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_THEMES: &str = r##"
[[themes]]
id = "paper"
name = "Paper"
mode = "light"
colors = { primary = "#3B82F6", secondary = "#64748B", accent = "#10B981" }
preview = { background = "#FFFFFF", surface = "#F9FAFB", text = "#111827" }

[[themes]]
id = "ink"
name = "Ink"
description = "Night reading"
mode = "dark"
colors = { primary = "#3B82F6", secondary = "#64748B", accent = "#10B981" }
preview = { background = "#111827", surface = "#1F2937", text = "#F3F4F6" }
"##;

    #[test]
    fn test_builtin_is_valid() {
        let builtin = ThemeCatalog::builtin();
        assert!(ThemeCatalog::new(builtin.themes().to_vec()).is_ok());
        assert_eq!(builtin.len(), 12);
        assert_eq!(builtin.first().id, "light");
    }

    #[test]
    fn test_from_toml() {
        let catalog = ThemeCatalog::from_toml_str(TWO_THEMES).unwrap();
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["paper", "ink"]);
        assert_eq!(catalog.get("paper").unwrap().description, "");
        assert_eq!(catalog.get("ink").unwrap().mode, ThemeMode::Dark);
        assert_eq!(catalog.sibling_of("ink").unwrap().id, "paper");
    }

    #[test]
    fn test_rejects_invalid_catalogs() {
        assert!(matches!(ThemeCatalog::new(vec![]), Err(CatalogError::Empty)));

        let light = ThemeCatalog::builtin().get("light").cloned().unwrap();
        let dark = ThemeCatalog::builtin().get("dark").cloned().unwrap();

        assert!(matches!(
            ThemeCatalog::new(vec![light.clone()]),
            Err(CatalogError::MissingMode(ThemeMode::Dark))
        ));
        assert!(matches!(
            ThemeCatalog::new(vec![light.clone(), dark, light]),
            Err(CatalogError::DuplicateId(id)) if id == "light"
        ));
    }

    #[test]
    fn test_bad_color_is_a_parse_error() {
        let bad = TWO_THEMES.replace("#F3F4F6", "white");
        assert!(matches!(
            ThemeCatalog::from_toml_str(&bad),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_toml_round_trip_keeps_order() {
        let builtin = ThemeCatalog::builtin();
        let text = builtin.to_toml().unwrap();
        let reloaded = ThemeCatalog::from_toml_str(&text).unwrap();
        assert_eq!(reloaded.themes(), builtin.themes());
    }
}
