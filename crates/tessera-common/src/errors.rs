use std::path::PathBuf;

/// Failure reading or parsing `theme-registry.json`.
///
/// Never surfaced to callers: the registry loader logs it and substitutes
/// the built-in registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to read theme registry {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse theme registry {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reasons a single theme fails to load.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("theme not found or disabled: {0}")]
    NotFound(String),

    #[error("failed to read theme descriptor {path}: {source}")]
    DescriptorUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed descriptor {path}: {source}")]
    MalformedDescriptor {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing required field {0}")]
    MissingField(&'static str),

    #[error("missing required variable {0}")]
    MissingVariable(&'static str),

    #[error("required style file missing: {0}")]
    MissingRequiredStyle(&'static str),

    #[error("failed to read style file {path}: {source}")]
    StyleUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Both the requested and the fallback theme failed to load.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("unable to load any theme (requested '{desired}', fallback '{fallback}')")]
    NoThemeAvailable {
        desired: String,
        fallback: String,
        #[source]
        source: ThemeError,
    },
}
