//! axum routes hosting the theme layer.
//!
//! `/theme` and `/theme.css` run behind [`ThemeLayer`]; the catalog and
//! admin routes do not, so they keep working when no theme loads.

use crate::context::ThemeContext;
use crate::middleware::ThemeLayer;
use crate::resolver::ThemeResolver;
use axum::{
    error_handling::HandleErrorLayer,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tessera_config::{SettingsSource, ThemeConfig, ThemeManager};
use tower::{BoxError, ServiceBuilder};
use tracing::error;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeView {
    theme_name: String,
    theme: ThemeConfig,
}

/// Build the application router around a shared manager.
pub fn router(manager: Arc<ThemeManager>, settings: SettingsSource) -> Router {
    let resolver = ThemeResolver::new(Arc::clone(&manager));
    let theme_layer = ThemeLayer::new(resolver, settings).with_default_decorators();

    let themed = Router::new()
        .route("/theme", get(current_theme))
        .route("/theme.css", get(theme_stylesheet))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_theme_error))
                .layer(theme_layer),
        );

    let admin = Router::new()
        .route("/themes", get(list_themes))
        .route("/admin/cache/clear", post(clear_cache));

    themed.merge(admin).with_state(manager)
}

async fn handle_theme_error(err: BoxError) -> (StatusCode, String) {
    error!("request aborted: {err}");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

async fn current_theme(Extension(ctx): Extension<ThemeContext>) -> Json<ThemeView> {
    Json(ThemeView {
        theme: ThemeConfig::clone(&ctx.theme),
        theme_name: ctx.theme_name,
    })
}

async fn theme_stylesheet(Extension(ctx): Extension<ThemeContext>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        ctx.theme.stylesheet(),
    )
}

async fn list_themes(State(manager): State<Arc<ThemeManager>>) -> Json<Vec<String>> {
    Json(manager.available_themes().await)
}

async fn clear_cache(State(manager): State<Arc<ThemeManager>>) -> StatusCode {
    manager.clear_cache();
    StatusCode::NO_CONTENT
}
