//! Descriptor validation.

use super::types::ThemeConfig;
use tessera_common::ThemeError;

/// CSS variables every theme must define, in checking order.
pub const REQUIRED_VARIABLES: [&str; 5] = [
    "--background-color",
    "--foreground-color",
    "--highlight-color",
    "--border-color",
    "--cell-background-color",
];

/// Check required fields, then required variables, stopping at the first
/// gap. Empty strings count as missing.
pub fn validate_theme(config: &ThemeConfig) -> Result<(), ThemeError> {
    let fields = [
        ("name", config.name.as_str()),
        ("displayName", config.display_name.as_str()),
        ("version", config.version.as_str()),
    ];
    for (field, value) in fields {
        if value.is_empty() {
            return Err(ThemeError::MissingField(field));
        }
    }

    let Some(variables) = config.variables.as_ref() else {
        return Err(ThemeError::MissingField("variables"));
    };

    for variable in REQUIRED_VARIABLES {
        if variables.get(variable).map_or(true, |value| value.is_empty()) {
            return Err(ThemeError::MissingVariable(variable));
        }
    }

    Ok(())
}
