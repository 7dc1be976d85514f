//! Theme store configuration

use crate::presets::{DARK_ID, LIGHT_ID};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Keys, ids, and class names the store works with.
///
/// Loaded from the `[theme]` table of `tinta.toml`; every field is optional.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Storage key the selected id is persisted under
    pub storage_key: String,
    /// Id selected when nothing valid is persisted
    pub default_theme: String,
    /// Marker class added to the document root for dark themes
    pub dark_class: String,
    /// Light end of the simple light/dark toggle
    pub canonical_light: String,
    /// Dark end of the simple light/dark toggle
    pub canonical_dark: String,
    /// Optional external catalog file (TOML `[[themes]]`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            default_theme: LIGHT_ID.to_string(),
            dark_class: "dark".to_string(),
            canonical_light: LIGHT_ID.to_string(),
            canonical_dark: DARK_ID.to_string(),
            catalog: None,
        }
    }
}
