//! Theme descriptors, validation, and CSS fragment loading.
//!
//! A theme is a directory holding `theme.json` plus up to three CSS files.
//! The descriptor is validated before any CSS is read.

mod styles;
mod types;
mod validation;


pub use styles::{load_styles, REQUIRED_STYLE, STYLE_FILES};
pub use types::{ThemeAssets, ThemeCompatibility, ThemeConfig, ThemeFeatures, DESCRIPTOR_FILE};
pub use validation::{validate_theme, REQUIRED_VARIABLES};
