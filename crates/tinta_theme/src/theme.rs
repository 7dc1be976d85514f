//! Theme definition types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use tinta_core::Color;

/// Light or dark visual mode of a theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite mode
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme mode {0:?}, expected \"light\" or \"dark\"")]
pub struct ParseModeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Brand color tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
}

/// Swatch colors shown when previewing a theme in a picker
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemePreview {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
}

/// A named, immutable bundle of color tokens plus a mode flag
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Stable id, used as the persisted value
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub mode: ThemeMode,
    pub colors: ThemeColors,
    pub preview: ThemePreview,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Generate a CSS variable map from the theme's tokens.
    ///
    /// Keys are variable names without the `--` prefix; values are hex
    /// color strings.
    ///
    /// ```
    /// use tinta_theme::presets::builtin_themes;
    ///
    /// let themes = builtin_themes();
    /// let vars = themes[0].css_variables();
    /// assert_eq!(vars["primary"], "#3B82F6");
    /// assert_eq!(vars["preview-background"], "#FFFFFF");
    /// ```
    pub fn css_variables(&self) -> BTreeMap<String, String> {
        let mut vars = BTreeMap::new();
        vars.insert("primary".into(), self.colors.primary.to_string());
        vars.insert("secondary".into(), self.colors.secondary.to_string());
        vars.insert("accent".into(), self.colors.accent.to_string());
        vars.insert(
            "preview-background".into(),
            self.preview.background.to_string(),
        );
        vars.insert("preview-surface".into(), self.preview.surface.to_string());
        vars.insert("preview-text".into(), self.preview.text.to_string());
        vars
    }

    /// Render the CSS variables as a declaration block for `selector`
    pub fn to_css_block(&self, selector: &str) -> String {
        let mut css = format!("{selector} {{\n");
        for (name, value) in self.css_variables() {
            css.push_str(&format!("  --{name}: {value};\n"));
        }
        css.push('}');
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggle_and_parse() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert!("dim".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_css_block() {
        let theme = Theme {
            id: "ink".into(),
            name: "Ink".into(),
            description: String::new(),
            mode: ThemeMode::Dark,
            colors: ThemeColors {
                primary: Color::from_hex(0x3B82F6),
                secondary: Color::from_hex(0x64748B),
                accent: Color::from_hex(0x10B981),
            },
            preview: ThemePreview {
                background: Color::from_hex(0x111827),
                surface: Color::from_hex(0x1F2937),
                text: Color::from_hex(0xF3F4F6),
            },
        };

        let css = theme.to_css_block(".dark");
        assert!(css.starts_with(".dark {\n"));
        assert!(css.contains("  --accent: #10B981;\n"));
        assert!(css.contains("  --preview-surface: #1F2937;\n"));
        assert!(css.ends_with('}'));
    }
}
