//! Registry file reading and shape normalization.

use super::types::{ThemeRegistry, ThemeRegistryEntry};
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use tessera_common::RegistryError;

/// Registry file name, relative to the themes root.
pub const REGISTRY_FILE: &str = "theme-registry.json";

const DISABLED_STATUS: &str = "disabled";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRegistry {
    themes: Value,
    #[serde(default)]
    default_theme: Option<String>,
}

/// `{"acme": {"status": "active"}, ...}`
#[derive(Deserialize)]
struct CatalogEntry {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    path: Option<String>,
}

/// `[{"name": "acme", "path": "acme", "enabled": true}, ...]`
#[derive(Deserialize)]
struct ListedEntry {
    name: String,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    enabled: bool,
}

/// Parse registry JSON in either accepted shape.
///
/// Catalog entries keep the order they have in the file. An entry without
/// a `path` uses its name as the directory.
pub fn parse_registry(content: &str) -> Result<ThemeRegistry, serde_json::Error> {
    let raw: RawRegistry = serde_json::from_str(content)?;

    let entries = match raw.themes {
        Value::Object(themes) => catalog_entries(themes)?,
        Value::Array(themes) => listed_entries(themes)?,
        other => {
            return Err(serde_json::Error::custom(format!(
                "`themes` must be an object or an array, found {other}"
            )))
        }
    };

    Ok(ThemeRegistry {
        entries,
        default_theme: raw
            .default_theme
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "default".into()),
    })
}

fn catalog_entries(themes: Map<String, Value>) -> Result<Vec<ThemeRegistryEntry>, serde_json::Error> {
    themes
        .into_iter()
        .map(|(name, value)| {
            let entry: CatalogEntry = serde_json::from_value(value).map_err(|e| {
                serde_json::Error::custom(format!("catalog entry `{name}`: {e}"))
            })?;
            let enabled = entry.status.as_deref() != Some(DISABLED_STATUS);
            let path = or_name(entry.path, &name);
            Ok(ThemeRegistryEntry {
                name,
                path,
                enabled,
            })
        })
        .collect()
}

fn listed_entries(themes: Vec<Value>) -> Result<Vec<ThemeRegistryEntry>, serde_json::Error> {
    themes
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let entry: ListedEntry = serde_json::from_value(value).map_err(|e| {
                serde_json::Error::custom(format!("listed entry {index}: {e}"))
            })?;
            let path = or_name(entry.path, &entry.name);
            Ok(ThemeRegistryEntry {
                name: entry.name,
                path,
                enabled: entry.enabled,
            })
        })
        .collect()
}

fn or_name(path: Option<String>, name: &str) -> String {
    path.filter(|p| !p.is_empty())
        .unwrap_or_else(|| name.to_string())
}

/// Read and parse `<root>/theme-registry.json`.
pub async fn read_registry(root: &Path) -> Result<ThemeRegistry, RegistryError> {
    let path = root.join(REGISTRY_FILE);

    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| RegistryError::Read {
            path: path.clone(),
            source,
        })?;

    parse_registry(&content).map_err(|source| RegistryError::Parse { path, source })
}
