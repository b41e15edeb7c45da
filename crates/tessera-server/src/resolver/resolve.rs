use crate::context::ThemeContext;
use std::sync::Arc;
use tessera_common::{ResolveError, ThemeError};
use tessera_config::{ThemeManager, ThemeSettings};
use tracing::{error, warn};

/// Outcome of a successful resolution.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub context: ThemeContext,
    /// True when the requested theme failed and the fallback was used.
    pub fallback: bool,
}

/// Picks the theme for a request: the requested theme, else the fallback,
/// else a fatal [`ResolveError`]. At most two loads per call.
#[derive(Debug, Clone)]
pub struct ThemeResolver {
    manager: Arc<ThemeManager>,
}

impl ThemeResolver {
    pub fn new(manager: Arc<ThemeManager>) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &Arc<ThemeManager> {
        &self.manager
    }

    pub async fn resolve(&self, settings: &ThemeSettings) -> Result<Resolution, ResolveError> {
        self.manager.apply_settings(settings);

        let desired = settings.theme_name.as_str();
        let fallback = settings.fallback_theme.as_str();

        let err = match self.manager.load_theme(desired).await {
            Ok(theme) => {
                return Ok(Resolution {
                    context: ThemeContext::new(desired, theme),
                    fallback: false,
                });
            }
            Err(e) => e,
        };

        // Retrying the same name would only repeat the failure.
        if desired == fallback {
            return Err(fatal(desired, fallback, err));
        }

        warn!(theme = desired, fallback, "theme failed to load, falling back: {err}");

        match self.manager.load_theme(fallback).await {
            Ok(theme) => Ok(Resolution {
                context: ThemeContext::new(fallback, theme),
                fallback: true,
            }),
            Err(e) => Err(fatal(desired, fallback, e)),
        }
    }
}

fn fatal(desired: &str, fallback: &str, source: ThemeError) -> ResolveError {
    error!(theme = desired, fallback, "fallback theme failed to load: {source}");
    ResolveError::NoThemeAvailable {
        desired: desired.to_string(),
        fallback: fallback.to_string(),
        source,
    }
}
