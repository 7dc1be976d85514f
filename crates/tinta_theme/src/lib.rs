//! Tinta Theme System
//!
//! Theme selection for Tinta applications: a catalog of light and dark
//! themes, and a store that tracks the active one.
//!
//! # Overview
//!
//! - **Catalog**: ordered, validated themes; built-in or loaded from TOML
//! - **Store**: current selection, grouped light/dark views, subscriptions
//! - **Storage**: the selected id is persisted under a single key
//! - **Document root**: a `dark` marker class follows the active mode
//!
//! # Quick Start
//!
//! ```rust
//! use tinta_theme::{ThemeMode, ThemeStore};
//!
//! let mut store = ThemeStore::in_memory();
//! store.initialize();
//!
//! store.subscribe(|change| {
//!     println!("theme is now {}", change.theme.id);
//! });
//!
//! store.set_theme("emerald-dark");
//! assert_eq!(store.mode(), ThemeMode::Dark);
//! assert!(store.root().contains("dark"));
//!
//! // Unknown ids are ignored
//! store.set_theme("nonexistent");
//! assert_eq!(store.current_id(), "emerald-dark");
//!
//! // Jumps to the first light theme in catalog order
//! store.toggle_mode();
//! assert_eq!(store.current_id(), "light");
//! ```
//!
//! # Collaborators
//!
//! The store is generic over [`ThemeStorage`] and [`DocumentRoot`]:
//!
//! - [`MemoryStorage`], [`FileStorage`], [`UnavailableStorage`]
//! - [`ClassList`], [`NoopRoot`]

pub mod catalog;
pub mod config;
pub mod presets;
pub mod root;
pub mod state;
pub mod storage;
pub mod theme;

// Re-export commonly used types
pub use catalog::{CatalogError, ThemeCatalog};
pub use config::ThemeConfig;
pub use presets::{builtin_themes, DARK_ID, LIGHT_ID};
pub use root::{ClassList, DocumentRoot, NoopRoot};
pub use state::{ChangeCause, ThemeChange, ThemeStore};
pub use storage::{FileStorage, MemoryStorage, StorageError, ThemeStorage, UnavailableStorage};
pub use theme::{ParseModeError, Theme, ThemeColors, ThemeMode, ThemePreview};
pub use tinta_core::{Color, SubscriptionId};
