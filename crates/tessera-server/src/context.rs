use std::sync::Arc;
use tessera_config::ThemeConfig;

/// The theme resolved for one request.
///
/// Inserted into the request extensions by [`crate::ThemeLayer`]; handlers
/// read it with `axum::Extension<ThemeContext>`.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    pub theme: Arc<ThemeConfig>,
    /// Registry name the theme was loaded under.
    pub theme_name: String,
}

impl ThemeContext {
    pub fn new(theme_name: impl Into<String>, theme: Arc<ThemeConfig>) -> Self {
        Self {
            theme,
            theme_name: theme_name.into(),
        }
    }
}
