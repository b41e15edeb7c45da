use super::ThemeSettings;

/// Where the theme layer reads its settings from on each request.
#[derive(Debug, Clone, Default)]
pub enum SettingsSource {
    /// Re-read the process environment for every request.
    #[default]
    Environment,
    /// Use the same settings for every request.
    Fixed(ThemeSettings),
}

impl SettingsSource {
    pub fn current(&self) -> ThemeSettings {
        match self {
            Self::Environment => ThemeSettings::from_env(),
            Self::Fixed(settings) => settings.clone(),
        }
    }
}
