//! Response annotations applied after a themed request completes.
//!
//! These are not part of theme resolution; [`crate::ThemeLayer`] runs them
//! only when configured with them.

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Response},
};
use std::fmt;

/// Post-processing hook for responses that passed through the theme layer.
pub trait ResponseDecorator: fmt::Debug + Send + Sync {
    fn decorate(&self, response: &mut Response<Body>);
}

const SPECULATION_RULES: HeaderName = HeaderName::from_static("speculation-rules");

/// Adds a `Speculation-Rules` prefetch hint to HTML responses.
#[derive(Debug, Clone)]
pub struct SpeculationRules {
    rules: HeaderValue,
}

impl SpeculationRules {
    pub fn new(rules: HeaderValue) -> Self {
        Self { rules }
    }
}

impl Default for SpeculationRules {
    fn default() -> Self {
        Self::new(HeaderValue::from_static("\"/rules/prefetch.json\""))
    }
}

impl ResponseDecorator for SpeculationRules {
    fn decorate(&self, response: &mut Response<Body>) {
        if is_html(response) {
            response
                .headers_mut()
                .insert(SPECULATION_RULES, self.rules.clone());
        }
    }
}

/// Sets `Cache-Control` when the handler did not.
#[derive(Debug, Clone)]
pub struct DefaultCacheControl {
    value: HeaderValue,
}

impl DefaultCacheControl {
    pub fn new(value: HeaderValue) -> Self {
        Self { value }
    }
}

impl Default for DefaultCacheControl {
    fn default() -> Self {
        Self::new(HeaderValue::from_static("public, max-age=300, s-maxage=300"))
    }
}

impl ResponseDecorator for DefaultCacheControl {
    fn decorate(&self, response: &mut Response<Body>) {
        response
            .headers_mut()
            .entry(header::CACHE_CONTROL)
            .or_insert_with(|| self.value.clone());
    }
}

/// Compare the media type only, ignoring parameters such as `charset`.
fn is_html(response: &Response<Body>) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("text/html"))
}
