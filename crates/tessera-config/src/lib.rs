//! Tessera theme configuration.
//!
//! Loads named themes (a `theme.json` descriptor plus CSS fragments) from a
//! themes root directory, validates them, and memoizes the results in a
//! [`ThemeManager`] that callers construct and share explicitly.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tessera_config::ThemeManager;
//!
//! # async fn run() -> Result<(), tessera_common::ThemeError> {
//! let manager = ThemeManager::new("theme");
//! let theme = manager.load_theme("default").await?;
//! println!("{} {}", theme.display_name, theme.version);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod manager;
pub mod registry;
pub mod settings;
pub mod theme;

#[cfg(test)]
mod fixtures;

// Re-export core types for convenience
pub use cache::ThemeCache;
pub use manager::ThemeManager;
pub use registry::{ThemeRegistry, ThemeRegistryEntry, REGISTRY_FILE};
pub use settings::{SettingsSource, ThemeSettings};
pub use theme::{ThemeConfig, REQUIRED_VARIABLES, STYLE_FILES};
