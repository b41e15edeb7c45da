//! Theme descriptor types.
//!
//! Field names follow the camelCase keys of `theme.json`.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Descriptor file name inside a theme directory.
pub const DESCRIPTOR_FILE: &str = "theme.json";

/// A theme descriptor, with `styles` filled in once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub display_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// CSS custom-property name (with leading `--`) to value.
    #[serde(default)]
    pub variables: Option<BTreeMap<String, String>>,
    /// Style file name to raw CSS text.
    #[serde(default)]
    pub styles: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<ThemeAssets>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<ThemeCompatibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<ThemeFeatures>,
}

impl ThemeConfig {
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.as_ref()?.get(name).map(String::as_str)
    }

    /// Loaded CSS concatenated in style-file order.
    pub fn stylesheet(&self) -> String {
        super::STYLE_FILES
            .iter()
            .filter_map(|file| self.styles.get(*file))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeAssets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeCompatibility {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeFeatures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fonts: Option<bool>,
}

// `null` reads as absent, the same as a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
