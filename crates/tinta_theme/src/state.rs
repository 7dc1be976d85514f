//! Theme selection store
//!
//! [`ThemeStore`] owns the current theme selection. Every change runs the
//! same synchronous chain before the call returns:
//!
//! 1. the dark marker class on the document root is set or cleared
//! 2. the new id is written to storage (best effort)
//! 3. subscribers are notified
//!
//! Invalid ids are ignored and storage failures are logged, so no operation
//! here returns an error.

use crate::catalog::ThemeCatalog;
use crate::config::ThemeConfig;
use crate::root::{ClassList, DocumentRoot};
use crate::storage::{MemoryStorage, ThemeStorage};
use crate::theme::{Theme, ThemeMode};
use tinta_core::{Notifier, SubscriptionId};

/// What caused a selection change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeCause {
    /// Initial application at [`ThemeStore::initialize`]
    Initialized,
    /// [`ThemeStore::set_theme`]
    Selected,
    /// [`ThemeStore::toggle_theme`]
    ToggledTheme,
    /// [`ThemeStore::toggle_mode`]
    ToggledMode,
}

/// Delivered to subscribers after each selection change
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub previous_id: String,
    pub theme: Theme,
    pub cause: ChangeCause,
}

/// Current theme selection with its persistence and root side effects
pub struct ThemeStore<S = MemoryStorage, R = ClassList> {
    catalog: ThemeCatalog,
    config: ThemeConfig,
    current_id: String,
    storage: S,
    root: R,
    listeners: Notifier<ThemeChange>,
    initialized: bool,
}

impl ThemeStore {
    /// Store over the built-in catalog with in-memory collaborators
    pub fn in_memory() -> Self {
        Self::new(
            ThemeCatalog::builtin(),
            ThemeConfig::default(),
            MemoryStorage::new(),
            ClassList::new(),
        )
    }
}

impl<S: ThemeStorage, R: DocumentRoot> ThemeStore<S, R> {
    /// Construct an uninitialized store selecting `config.default_theme`.
    ///
    /// Call [`initialize`](Self::initialize) before handing the store to
    /// consumers.
    pub fn new(catalog: ThemeCatalog, config: ThemeConfig, storage: S, root: R) -> Self {
        let current_id = config.default_theme.clone();
        Self {
            catalog,
            config,
            current_id,
            storage,
            root,
            listeners: Notifier::new(),
            initialized: false,
        }
    }

    /// Seed the selection from storage and apply its mode to the root.
    ///
    /// Only the first call has any effect.
    pub fn initialize(&mut self) {
        if self.initialized {
            tracing::warn!("ThemeStore::initialize called more than once; ignoring");
            return;
        }
        self.initialized = true;

        let previous_id = self.current_id.clone();
        match self.storage.get(&self.config.storage_key) {
            Ok(Some(saved)) if self.catalog.contains(&saved) => {
                tracing::debug!(theme = %saved, "restoring persisted theme");
                self.current_id = saved;
            }
            Ok(Some(saved)) => {
                tracing::debug!(theme = %saved, "persisted theme is not in the catalog");
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, "could not read persisted theme");
            }
        }

        self.apply_mode();
        self.notify(previous_id, ChangeCause::Initialized);
    }

    /// Select `theme_id`. Unknown ids are ignored.
    pub fn set_theme(&mut self, theme_id: &str) {
        self.select(theme_id, ChangeCause::Selected);
    }

    /// Switch between the canonical light and dark themes.
    ///
    /// Any theme other than the canonical light one goes to canonical light.
    pub fn toggle_theme(&mut self) {
        let target = if self.current_id == self.config.canonical_light {
            self.config.canonical_dark.clone()
        } else {
            self.config.canonical_light.clone()
        };
        self.select(&target, ChangeCause::ToggledTheme);
    }

    /// Switch to the first theme of the opposite mode, in catalog order.
    ///
    /// The current color family is not carried over; see
    /// [`ThemeCatalog::sibling_of`] for that lookup.
    pub fn toggle_mode(&mut self) {
        let mode = self.current_theme().mode.toggle();
        let target = self.catalog.first_of_mode(mode).map(|t| t.id.clone());
        if let Some(target) = target {
            self.select(&target, ChangeCause::ToggledMode);
        }
    }

    /// The active theme, or the first catalog entry if the id is unknown
    pub fn current_theme(&self) -> &Theme {
        self.catalog
            .get(&self.current_id)
            .unwrap_or_else(|| self.catalog.first())
    }

    pub fn current_id(&self) -> &str {
        &self.current_id
    }

    pub fn mode(&self) -> ThemeMode {
        self.current_theme().mode
    }

    pub fn light_themes(&self) -> Vec<&Theme> {
        self.catalog.by_mode(ThemeMode::Light)
    }

    pub fn dark_themes(&self) -> Vec<&Theme> {
        self.catalog.by_mode(ThemeMode::Dark)
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    /// Register a listener called synchronously after every change
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ThemeChange) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Consume the store, returning its collaborators
    pub fn into_parts(self) -> (S, R) {
        (self.storage, self.root)
    }

    fn select(&mut self, theme_id: &str, cause: ChangeCause) {
        if !self.catalog.contains(theme_id) {
            tracing::debug!(theme = %theme_id, "ignoring unknown theme id");
            return;
        }
        if self.current_id == theme_id {
            return;
        }
        if !self.initialized {
            tracing::debug!("theme selected before ThemeStore::initialize");
        }

        tracing::debug!(
            "ThemeStore - switching from {:?} to {:?} ({:?})",
            self.current_id,
            theme_id,
            cause
        );
        let previous_id = std::mem::replace(&mut self.current_id, theme_id.to_string());

        self.apply_mode();
        self.persist();
        self.notify(previous_id, cause);
    }

    fn apply_mode(&mut self) {
        let dark = self.current_theme().is_dark();
        self.root.set_class(&self.config.dark_class, dark);
    }

    fn persist(&mut self) {
        if let Err(err) = self.storage.set(&self.config.storage_key, &self.current_id) {
            tracing::warn!(
                theme = %self.current_id,
                error = %err,
                "could not persist theme selection"
            );
        }
    }

    fn notify(&mut self, previous_id: String, cause: ChangeCause) {
        if self.listeners.is_empty() {
            return;
        }
        let change = ThemeChange {
            previous_id,
            theme: self.current_theme().clone(),
            cause,
        };
        self.listeners.notify(&change);
    }
}

impl<S, R> std::fmt::Debug for ThemeStore<S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current_id", &self.current_id)
            .field("initialized", &self.initialized)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
