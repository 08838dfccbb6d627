//! Scrolly API server entry point.

use std::error::Error;
use std::sync::Arc;

use scrolly_api::config::AppConfig;
use scrolly_api::state::AppState;
use scrolly_core::clock::SystemClock;
use scrolly_sheets::google_sheet::GoogleSheetSource;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting scrolly API server");

    let config = AppConfig::from_env()?;
    let addr = config.socket_addr()?;

    let row_source = GoogleSheetSource::new(config.sheet_url.clone(), config.google_api_key.clone());
    tracing::info!(spreadsheet_id = %row_source.spreadsheet_id(), "Using Google Sheet");

    let app_state = AppState::new(Arc::new(SystemClock), Arc::new(row_source));

    // The page shell is served from the same origin; CORS covers pages
    // hosted elsewhere that read the story API.
    let app = scrolly_api::build_app(app_state, config.static_dir.as_deref())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
