//! Environment-sourced theme settings.
//!
//! All values have defaults, so an empty environment resolves to the
//! `default` theme with caching and debug logging off.

mod source;


pub use source::SettingsSource;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Theme to load on each request.
pub const ENV_THEME_NAME: &str = "THEME_NAME";
/// Theme to retry with when the requested one fails.
pub const ENV_THEME_FALLBACK: &str = "THEME_FALLBACK";
/// `true` enables the loaded-theme cache.
pub const ENV_THEME_CACHE_ENABLED: &str = "THEME_CACHE_ENABLED";
/// `true` enables loader diagnostics.
pub const ENV_THEME_DEBUG: &str = "THEME_DEBUG";
/// Directory holding `theme-registry.json` and the theme folders.
pub const ENV_THEMES_ROOT: &str = "THEMES_ROOT";

/// Name used when no theme or fallback is configured.
pub const DEFAULT_THEME_NAME: &str = "default";

/// Per-request theme selection and loader switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub theme_name: String,
    pub fallback_theme: String,
    pub cache_enabled: bool,
    pub debug: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            theme_name: DEFAULT_THEME_NAME.into(),
            fallback_theme: DEFAULT_THEME_NAME.into(),
            cache_enabled: false,
            debug: false,
        }
    }
}

impl ThemeSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    ///
    /// Empty values count as unset. Switches are on only for the exact
    /// string `true`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            theme_name: non_empty(ENV_THEME_NAME).unwrap_or(defaults.theme_name),
            fallback_theme: non_empty(ENV_THEME_FALLBACK).unwrap_or(defaults.fallback_theme),
            cache_enabled: non_empty(ENV_THEME_CACHE_ENABLED).is_some_and(|v| v == "true"),
            debug: non_empty(ENV_THEME_DEBUG).is_some_and(|v| v == "true"),
        }
    }

    pub fn with_theme(mut self, name: impl Into<String>) -> Self {
        self.theme_name = name.into();
        self
    }

    pub fn with_fallback(mut self, name: impl Into<String>) -> Self {
        self.fallback_theme = name.into();
        self
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }
}

/// Resolve the themes root: `THEMES_ROOT` if set, else `./theme`.
pub fn default_themes_root() -> PathBuf {
    match std::env::var(ENV_THEMES_ROOT) {
        Ok(root) if !root.is_empty() => PathBuf::from(root),
        _ => PathBuf::from("theme"),
    }
}
