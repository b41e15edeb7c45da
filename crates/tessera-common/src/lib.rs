//! Shared types for the tessera theme layer.

pub mod errors;

pub use errors::{RegistryError, ResolveError, ThemeError};

pub type Result<T> = std::result::Result<T, ThemeError>;
