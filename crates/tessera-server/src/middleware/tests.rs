//! Tests for the theme middleware and response decorators.

use super::*;
use crate::context::ThemeContext;
use crate::fixtures;
use crate::resolver::ThemeResolver;
use axum::body::Body;
use axum::http::{header, HeaderValue, Request, Response, StatusCode};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tessera_common::ResolveError;
use tessera_config::{SettingsSource, ThemeManager, ThemeSettings};
use tower::util::BoxCloneService;
use tower::{BoxError, Service, ServiceBuilder, ServiceExt};

// Downstream service that counts calls and echoes the theme it saw.
fn downstream(
    calls: Arc<AtomicUsize>,
    content_type: &'static str,
) -> BoxCloneService<Request<Body>, Response<Body>, BoxError> {
    BoxCloneService::new(tower::service_fn(move |req: Request<Body>| {
        let calls = Arc::clone(&calls);
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            let seen = req
                .extensions()
                .get::<ThemeContext>()
                .map(|ctx| ctx.theme_name.clone())
                .unwrap_or_default();
            let response = Response::builder()
                .header(header::CONTENT_TYPE, content_type)
                .header("x-seen-theme", seen)
                .body(Body::from("ok"))?;
            Ok::<_, BoxError>(response)
        }
    }))
}

fn layer(root: &std::path::Path, settings: ThemeSettings) -> ThemeLayer {
    let resolver = ThemeResolver::new(Arc::new(ThemeManager::new(root)));
    ThemeLayer::new(resolver, SettingsSource::Fixed(settings))
}

fn request() -> Request<Body> {
    Request::builder()
        .uri("http://example.com/posts")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn requested_theme_sets_headers_and_context() {
    let dir = fixtures::themes_dir();
    let calls = Arc::new(AtomicUsize::new(0));
    let service = ServiceBuilder::new()
        .layer(layer(dir.path(), ThemeSettings::default().with_theme("acme")))
        .service(downstream(Arc::clone(&calls), "text/plain"));

    let response = service.oneshot(request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(response.headers().get(THEME_NAME_HEADER).unwrap(), "acme");
    assert_eq!(response.headers().get(THEME_VERSION_HEADER).unwrap(), "2.0.0");
    assert!(!response.headers().contains_key(THEME_FALLBACK_HEADER));
    assert_eq!(response.headers().get("x-seen-theme").unwrap(), "acme");
}

#[tokio::test]
async fn failed_theme_uses_fallback_and_marks_it() {
    let dir = fixtures::themes_dir();
    let calls = Arc::new(AtomicUsize::new(0));
    let settings = ThemeSettings::default()
        .with_theme("missing")
        .with_fallback("default");
    let service = ServiceBuilder::new()
        .layer(layer(dir.path(), settings))
        .service(downstream(Arc::clone(&calls), "text/plain"));

    let response = service.oneshot(request()).await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(response.headers().get(THEME_NAME_HEADER).unwrap(), "default");
    assert_eq!(response.headers().get(THEME_VERSION_HEADER).unwrap(), "1.0.0");
    assert_eq!(response.headers().get(THEME_FALLBACK_HEADER).unwrap(), "true");
    assert_eq!(response.headers().get("x-seen-theme").unwrap(), "default");
}

#[tokio::test]
async fn double_failure_never_reaches_downstream() {
    let dir = fixtures::themes_dir();
    let calls = Arc::new(AtomicUsize::new(0));
    let settings = ThemeSettings::default()
        .with_theme("missing")
        .with_fallback("also-missing");
    let service = ServiceBuilder::new()
        .layer(layer(dir.path(), settings))
        .service(downstream(Arc::clone(&calls), "text/plain"));

    let err = service.oneshot(request()).await.unwrap_err();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(err.downcast_ref::<ResolveError>().is_some());
    assert!(err.to_string().starts_with("unable to load any theme"));
}

#[tokio::test]
async fn each_request_gets_its_own_resolution() {
    let dir = fixtures::themes_dir();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut service = ServiceBuilder::new()
        .layer(layer(dir.path(), ThemeSettings::default().with_theme("acme")))
        .service(downstream(Arc::clone(&calls), "text/plain"));

    for _ in 0..3 {
        let response = service.ready().await.unwrap().call(request()).await.unwrap();
        assert_eq!(response.headers().get(THEME_NAME_HEADER).unwrap(), "acme");
    }
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn plain_layer_adds_no_decorations() {
    let dir = fixtures::themes_dir();
    let service = ServiceBuilder::new()
        .layer(layer(dir.path(), ThemeSettings::default()))
        .service(downstream(Arc::new(AtomicUsize::new(0)), "text/html"));

    let response = service.oneshot(request()).await.unwrap();

    assert!(!response.headers().contains_key("speculation-rules"));
    assert!(!response.headers().contains_key(header::CACHE_CONTROL));
}

#[tokio::test]
async fn default_decorators_annotate_html() {
    let dir = fixtures::themes_dir();
    let service = ServiceBuilder::new()
        .layer(layer(dir.path(), ThemeSettings::default()).with_default_decorators())
        .service(downstream(Arc::new(AtomicUsize::new(0)), "text/html; charset=utf-8"));

    let response = service.oneshot(request()).await.unwrap();

    assert_eq!(
        response.headers().get("speculation-rules").unwrap(),
        "\"/rules/prefetch.json\""
    );
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=300, s-maxage=300"
    );
}

#[tokio::test]
async fn default_decorators_skip_speculation_for_non_html() {
    let dir = fixtures::themes_dir();
    let service = ServiceBuilder::new()
        .layer(layer(dir.path(), ThemeSettings::default()).with_default_decorators())
        .service(downstream(Arc::new(AtomicUsize::new(0)), "application/json"));

    let response = service.oneshot(request()).await.unwrap();

    assert!(!response.headers().contains_key("speculation-rules"));
    assert!(response.headers().contains_key(header::CACHE_CONTROL));
}

#[test]
fn cache_control_keeps_existing_value() {
    let mut response = Response::builder()
        .header(header::CACHE_CONTROL, "no-store")
        .body(Body::empty())
        .unwrap();

    DefaultCacheControl::default().decorate(&mut response);

    assert_eq!(response.headers().get(header::CACHE_CONTROL).unwrap(), "no-store");
}

#[test]
fn custom_speculation_rules_value() {
    let mut response = Response::builder()
        .header(header::CONTENT_TYPE, "TEXT/HTML")
        .body(Body::empty())
        .unwrap();

    SpeculationRules::new(HeaderValue::from_static("\"/rules/custom.json\"")).decorate(&mut response);

    assert_eq!(
        response.headers().get("speculation-rules").unwrap(),
        "\"/rules/custom.json\""
    );
}

#[tokio::test]
async fn version_that_is_not_header_text_is_skipped() {
    let dir = fixtures::themes_dir();
    let theme_json = dir.path().join("acme").join("theme.json");
    let descriptor = std::fs::read_to_string(&theme_json)
        .unwrap()
        .replace("\"2.0.0\"", "\"2.0\\n0\"");
    std::fs::write(&theme_json, descriptor).unwrap();

    let service = ServiceBuilder::new()
        .layer(layer(dir.path(), ThemeSettings::default().with_theme("acme")))
        .service(downstream(Arc::new(AtomicUsize::new(0)), "text/plain"));

    let response = service.oneshot(request()).await.unwrap();

    assert_eq!(response.headers().get(THEME_NAME_HEADER).unwrap(), "acme");
    assert!(!response.headers().contains_key(THEME_VERSION_HEADER));
}
