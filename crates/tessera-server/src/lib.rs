//! Request-scoped theme resolution for axum.
//!
//! [`ThemeLayer`] resolves a theme through a shared
//! [`tessera_config::ThemeManager`] before each request reaches its handler,
//! retrying once with the fallback theme, and stores the result as a
//! [`ThemeContext`] request extension.

pub mod context;
pub mod middleware;
pub mod resolver;
pub mod routes;

#[cfg(test)]
mod fixtures;

pub use context::ThemeContext;
pub use middleware::{
    DefaultCacheControl, ResponseDecorator, SpeculationRules, ThemeLayer, ThemeMiddleware,
    THEME_FALLBACK_HEADER, THEME_NAME_HEADER, THEME_VERSION_HEADER,
};
pub use resolver::{Resolution, ThemeResolver};
