//! Theme registry: the catalog of known themes.
//!
//! `theme-registry.json` comes in two shapes. The current one maps theme
//! names to objects with a `status`; the legacy one lists
//! `{name, path, enabled}` entries directly. Both normalize into
//! [`ThemeRegistry`].

mod loader;
mod types;


pub use loader::{parse_registry, read_registry, REGISTRY_FILE};
pub use types::{ThemeRegistry, ThemeRegistryEntry, BUILT_IN_THEMES};
