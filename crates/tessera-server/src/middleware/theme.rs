//! Theme resolution middleware.
//!
//! Before the inner service runs, the layer resolves a theme (requested,
//! then fallback) and inserts a [`ThemeContext`] into the request
//! extensions. On the way out it sets:
//! - `X-Theme-Name` and `X-Theme-Version` on every themed response
//! - `X-Theme-Fallback: true` when the fallback theme was used
//!
//! When neither theme loads, the inner service is never called and the
//! [`tessera_common::ResolveError`] is returned as the service error.

use super::decorate::{DefaultCacheControl, ResponseDecorator, SpeculationRules};
use crate::context::ThemeContext;
use crate::resolver::{Resolution, ThemeResolver};
use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue, Response},
};
use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};
use tessera_config::SettingsSource;
use tower::{BoxError, Layer, Service};
use tracing::warn;

pub const THEME_NAME_HEADER: HeaderName = HeaderName::from_static("x-theme-name");
pub const THEME_VERSION_HEADER: HeaderName = HeaderName::from_static("x-theme-version");
pub const THEME_FALLBACK_HEADER: HeaderName = HeaderName::from_static("x-theme-fallback");

/// Layer for theme middleware
#[derive(Debug, Clone)]
pub struct ThemeLayer {
    resolver: ThemeResolver,
    settings: SettingsSource,
    decorators: Arc<Vec<Arc<dyn ResponseDecorator>>>,
}

impl ThemeLayer {
    /// Create a theme layer with no response decorators.
    pub fn new(resolver: ThemeResolver, settings: SettingsSource) -> Self {
        Self {
            resolver,
            settings,
            decorators: Arc::new(Vec::new()),
        }
    }

    /// Append a decorator; decorators run in insertion order.
    pub fn with_decorator(mut self, decorator: impl ResponseDecorator + 'static) -> Self {
        Arc::make_mut(&mut self.decorators).push(Arc::new(decorator));
        self
    }

    /// Add the speculation-rules hint and the default cache policy.
    pub fn with_default_decorators(self) -> Self {
        self.with_decorator(SpeculationRules::default())
            .with_decorator(DefaultCacheControl::default())
    }
}

impl<S> Layer<S> for ThemeLayer {
    type Service = ThemeMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ThemeMiddleware {
            inner,
            resolver: self.resolver.clone(),
            settings: self.settings.clone(),
            decorators: Arc::clone(&self.decorators),
        }
    }
}

/// Theme middleware
#[derive(Debug, Clone)]
pub struct ThemeMiddleware<S> {
    inner: S,
    resolver: ThemeResolver,
    settings: SettingsSource,
    decorators: Arc<Vec<Arc<dyn ResponseDecorator>>>,
}

impl<S> Service<Request> for ThemeMiddleware<S>
where
    S: Service<Request, Response = Response<Body>> + Send + Clone + 'static,
    S::Future: Send + 'static,
    S::Error: Into<BoxError>,
{
    type Response = Response<Body>;
    type Error = BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        // Keep the service that was polled ready; leave a fresh clone behind.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let resolver = self.resolver.clone();
        let settings = self.settings.current();
        let decorators = Arc::clone(&self.decorators);

        Box::pin(async move {
            let Resolution { context, fallback } = resolver.resolve(&settings).await?;

            let theme_name = context.theme_name.clone();
            let version = context.theme.version.clone();
            req.extensions_mut().insert::<ThemeContext>(context);

            let mut response = inner.call(req).await.map_err(Into::into)?;

            set_theme_headers(response.headers_mut(), &theme_name, &version, fallback);
            for decorator in decorators.iter() {
                decorator.decorate(&mut response);
            }

            Ok(response)
        })
    }
}

fn set_theme_headers(headers: &mut HeaderMap, theme_name: &str, version: &str, fallback: bool) {
    insert_text(headers, THEME_NAME_HEADER, theme_name);
    insert_text(headers, THEME_VERSION_HEADER, version);
    if fallback {
        headers.insert(THEME_FALLBACK_HEADER, HeaderValue::from_static("true"));
    }
}

fn insert_text(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(value) => {
            headers.insert(name, value);
        }
        Err(_) => warn!(header = %name, value, "skipping header value that is not valid HTTP text"),
    }
}
