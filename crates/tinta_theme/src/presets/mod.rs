//! Built-in theme presets.
//!
//! Each color family ships as a light/dark pair sharing the same brand
//! tokens; only the preview swatches differ between the two modes.

use crate::theme::{Theme, ThemeColors, ThemeMode, ThemePreview};
use tinta_core::Color;

/// Id of the default light theme
pub const LIGHT_ID: &str = "light";

/// Id of the default dark theme
pub const DARK_ID: &str = "dark";

const SLATE: Color = Color::from_hex(0x64748B);
const GRAY_900: Color = Color::from_hex(0x111827);
const GRAY_100: Color = Color::from_hex(0xF3F4F6);

#[derive(Clone, Copy)]
struct Family {
    slug: Option<&'static str>,
    label: &'static str,
    blurb: &'static str,
    primary: Color,
    accent: Color,
    light_surface: Color,
    dark_background: Color,
    dark_surface: Color,
}

const FAMILIES: [Family; 6] = [
    Family {
        slug: None,
        label: "",
        blurb: "",
        primary: Color::from_hex(0x3B82F6),
        accent: Color::from_hex(0x10B981),
        light_surface: Color::from_hex(0xF9FAFB),
        dark_background: GRAY_900,
        dark_surface: Color::from_hex(0x1F2937),
    },
    Family {
        slug: Some("emerald"),
        label: "Esmeralda",
        blurb: "verde esmeralda",
        primary: Color::from_hex(0x10B981),
        accent: Color::from_hex(0xDC2626),
        light_surface: Color::from_hex(0xECFDF5),
        dark_background: Color::from_hex(0x064E3B),
        dark_surface: Color::from_hex(0x047857),
    },
    Family {
        slug: Some("purple"),
        label: "Púrpura",
        blurb: "púrpura",
        primary: Color::from_hex(0xA855F7),
        accent: Color::from_hex(0xF59E0B),
        light_surface: Color::from_hex(0xFAF5FF),
        dark_background: Color::from_hex(0x581C87),
        dark_surface: Color::from_hex(0x6B21A8),
    },
    Family {
        slug: Some("rose"),
        label: "Rosa",
        blurb: "rosa",
        primary: Color::from_hex(0xF43F5E),
        accent: Color::from_hex(0x0EA5E9),
        light_surface: Color::from_hex(0xFFF1F2),
        dark_background: Color::from_hex(0x881337),
        dark_surface: Color::from_hex(0x9F1239),
    },
    Family {
        slug: Some("ocean"),
        label: "Océano",
        blurb: "azul océano",
        primary: Color::from_hex(0x0EA5E9),
        accent: Color::from_hex(0x14B8A6),
        light_surface: Color::from_hex(0xF0F9FF),
        dark_background: Color::from_hex(0x0C4A6E),
        dark_surface: Color::from_hex(0x075985),
    },
    Family {
        slug: Some("sunset"),
        label: "Atardecer",
        blurb: "naranja atardecer",
        primary: Color::from_hex(0xF97316),
        accent: Color::from_hex(0xDC2626),
        light_surface: Color::from_hex(0xFFF7ED),
        dark_background: Color::from_hex(0x7C2D12),
        dark_surface: Color::from_hex(0x9A3412),
    },
];

impl Family {
    fn theme(self, mode: ThemeMode) -> Theme {
        let (id, name) = match self.slug {
            None => (mode.as_str().to_string(), mode_label(mode).to_string()),
            Some(slug) => (
                format!("{slug}-{mode}"),
                format!("{} {}", self.label, mode_label(mode)),
            ),
        };

        let description = match self.slug {
            None => format!("Tema {} predeterminado", mode_word(mode)),
            Some(_) => format!("Tema {} en modo {}", self.blurb, mode_word(mode)),
        };

        let preview = match mode {
            ThemeMode::Light => ThemePreview {
                background: Color::WHITE,
                surface: self.light_surface,
                text: GRAY_900,
            },
            ThemeMode::Dark => ThemePreview {
                background: self.dark_background,
                surface: self.dark_surface,
                text: GRAY_100,
            },
        };

        Theme {
            id,
            name,
            description,
            mode,
            colors: ThemeColors {
                primary: self.primary,
                secondary: SLATE,
                accent: self.accent,
            },
            preview,
        }
    }
}

// Display strings are the catalog's shipped Spanish labels
fn mode_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "Claro",
        ThemeMode::Dark => "Oscuro",
    }
}

fn mode_word(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "claro",
        ThemeMode::Dark => "oscuro",
    }
}

/// The built-in themes in display order: each family's light theme
/// followed by its dark theme, default family first.
pub fn builtin_themes() -> Vec<Theme> {
    FAMILIES
        .iter()
        .flat_map(|family| ThemeMode::ALL.map(|mode| family.theme(mode)))
        .collect()
}
