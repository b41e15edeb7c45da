//! Registry type definitions and the built-in fallback catalog.

use serde::{Deserialize, Serialize};

/// Themes available when the registry file cannot be used.
pub const BUILT_IN_THEMES: &[&str] = &["default", "ios"];

/// One registered theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeRegistryEntry {
    pub name: String,
    /// Directory under the themes root.
    pub path: String,
    #[serde(default)]
    pub enabled: bool,
}

impl ThemeRegistryEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            enabled,
        }
    }
}

/// Normalized registry. Serializes in the legacy file shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRegistry {
    #[serde(rename = "themes")]
    pub entries: Vec<ThemeRegistryEntry>,
    /// Not checked against `entries`.
    pub default_theme: String,
}

impl ThemeRegistry {
    /// The registry used when `theme-registry.json` is missing or invalid.
    pub fn built_in() -> Self {
        Self {
            entries: BUILT_IN_THEMES
                .iter()
                .map(|name| ThemeRegistryEntry::new(*name, *name, true))
                .collect(),
            default_theme: "default".into(),
        }
    }

    pub fn find(&self, name: &str) -> Option<&ThemeRegistryEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Look up an entry that exists and is enabled.
    pub fn find_enabled(&self, name: &str) -> Option<&ThemeRegistryEntry> {
        self.find(name).filter(|entry| entry.enabled)
    }

    pub fn enabled_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.enabled)
            .map(|entry| entry.name.clone())
            .collect()
    }
}
