//! tessera-server: hosts the theme layer behind a small axum app.
//!
//! Theme selection is read from the environment on every request
//! (`THEME_NAME`, `THEME_FALLBACK`, `THEME_CACHE_ENABLED`, `THEME_DEBUG`).

mod cli;

use std::path::PathBuf;
use std::sync::Arc;

use tessera_config::settings::default_themes_root;
use tessera_config::{SettingsSource, ThemeManager, ThemeSettings};
use tessera_server::routes;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("tessera=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "tessera=info".parse().unwrap()),
            ),
        )
        .init();

    let themes_root = args
        .themes_root
        .map(PathBuf::from)
        .unwrap_or_else(default_themes_root);
    let settings = ThemeSettings::from_env();
    let manager = Arc::new(ThemeManager::with_settings(&themes_root, &settings));

    tracing::info!(
        root = %themes_root.display(),
        theme = %settings.theme_name,
        fallback = %settings.fallback_theme,
        "theme layer configured"
    );

    let app = routes::router(manager, SettingsSource::Environment);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind TCP listener");

    tracing::info!("tessera-server listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
    }
}
