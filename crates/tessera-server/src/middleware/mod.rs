//! Tower middleware attaching the resolved theme to each request.

mod decorate;
mod theme;

#[cfg(test)]
mod tests;

pub use decorate::{DefaultCacheControl, ResponseDecorator, SpeculationRules};
pub use theme::{
    ThemeLayer, ThemeMiddleware, THEME_FALLBACK_HEADER, THEME_NAME_HEADER, THEME_VERSION_HEADER,
};
