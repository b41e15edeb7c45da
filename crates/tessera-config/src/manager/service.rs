//! Core [`ThemeManager`] implementation: registry memoization, read-through
//! cache, and the theme load pipeline.

use crate::cache::ThemeCache;
use crate::registry::{self, ThemeRegistry};
use crate::settings::ThemeSettings;
use crate::theme::{self, ThemeConfig, DESCRIPTOR_FILE};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tessera_common::ThemeError;
use tracing::{info, warn};

/// Loads, validates, and memoizes themes from a themes root directory.
#[derive(Debug)]
pub struct ThemeManager {
    themes_root: PathBuf,
    registry: RwLock<Option<Arc<ThemeRegistry>>>,
    cache: ThemeCache,
    cache_enabled: AtomicBool,
    debug: AtomicBool,
}

impl ThemeManager {
    /// Create a manager with caching and debug logging off.
    pub fn new(themes_root: impl Into<PathBuf>) -> Self {
        Self {
            themes_root: themes_root.into(),
            registry: RwLock::new(None),
            cache: ThemeCache::new(),
            cache_enabled: AtomicBool::new(false),
            debug: AtomicBool::new(false),
        }
    }

    pub fn with_settings(themes_root: impl Into<PathBuf>, settings: &ThemeSettings) -> Self {
        let manager = Self::new(themes_root);
        manager.apply_settings(settings);
        manager
    }

    /// Take the cache and debug switches from `settings`.
    pub fn apply_settings(&self, settings: &ThemeSettings) {
        self.set_cache_enabled(settings.cache_enabled);
        self.set_debug(settings.debug);
    }

    pub fn themes_root(&self) -> &Path {
        &self.themes_root
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled.load(Ordering::Relaxed)
    }

    pub fn set_cache_enabled(&self, enabled: bool) {
        self.cache_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn debug(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    pub fn set_debug(&self, enabled: bool) {
        self.debug.store(enabled, Ordering::Relaxed);
    }

    /// Return the registry, reading it from disk on first use.
    ///
    /// A missing or invalid registry file yields the built-in registry.
    /// Whichever registry is stored first is kept until [`clear_cache`].
    ///
    /// [`clear_cache`]: Self::clear_cache
    pub async fn load_registry(&self) -> Arc<ThemeRegistry> {
        if let Some(registry) = self.memoized_registry() {
            return registry;
        }

        let loaded = match registry::read_registry(&self.themes_root).await {
            Ok(registry) => {
                if self.debug() {
                    info!(
                        root = %self.themes_root.display(),
                        themes = registry.entries.len(),
                        "theme registry loaded"
                    );
                }
                registry
            }
            Err(e) => {
                if self.debug() {
                    warn!("theme registry unavailable, using built-in registry: {e}");
                }
                ThemeRegistry::built_in()
            }
        };

        let mut slot = self
            .registry
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        slot.get_or_insert_with(|| Arc::new(loaded)).clone()
    }

    /// Load a theme by registry name.
    ///
    /// With caching on, a cached theme is returned without touching disk.
    pub async fn load_theme(&self, name: &str) -> Result<Arc<ThemeConfig>, ThemeError> {
        if self.cache_enabled() {
            if let Some(cached) = self.cache.get(name) {
                if self.debug() {
                    info!(theme = name, "theme served from cache");
                }
                return Ok(cached);
            }
        }

        match self.load_theme_from_disk(name).await {
            Ok(config) => {
                let config = Arc::new(config);
                if self.cache_enabled() {
                    self.cache.set(name, Arc::clone(&config));
                }
                if self.debug() {
                    info!(theme = name, version = %config.version, "theme loaded");
                }
                Ok(config)
            }
            Err(e) => {
                if self.debug() {
                    warn!(theme = name, "theme failed to load: {e}");
                }
                Err(e)
            }
        }
    }

    /// Names of the enabled themes, in registry order.
    pub async fn available_themes(&self) -> Vec<String> {
        self.load_registry().await.enabled_names()
    }

    pub fn cached_theme_count(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached theme and the memoized registry.
    pub fn clear_cache(&self) {
        self.cache.clear();
        *self
            .registry
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
        if self.debug() {
            info!("theme cache cleared");
        }
    }

    fn memoized_registry(&self) -> Option<Arc<ThemeRegistry>> {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn load_theme_from_disk(&self, name: &str) -> Result<ThemeConfig, ThemeError> {
        let registry = self.load_registry().await;
        let entry = registry
            .find_enabled(name)
            .ok_or_else(|| ThemeError::NotFound(name.to_string()))?;

        let theme_dir = self.themes_root.join(&entry.path);
        let descriptor_path = theme_dir.join(DESCRIPTOR_FILE);
        if self.debug() {
            info!(theme = name, path = %descriptor_path.display(), "reading theme descriptor");
        }

        let content = tokio::fs::read_to_string(&descriptor_path)
            .await
            .map_err(|source| ThemeError::DescriptorUnreadable {
                path: descriptor_path.clone(),
                source,
            })?;

        let mut config: ThemeConfig =
            serde_json::from_str(&content).map_err(|source| ThemeError::MalformedDescriptor {
                path: descriptor_path,
                source,
            })?;

        theme::validate_theme(&config)?;
        theme::load_styles(&theme_dir, &mut config.styles).await?;

        Ok(config)
    }
}
