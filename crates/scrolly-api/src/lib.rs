//! Scrolly API: serves the validated story and the page shell.
//!
//! The server fetches the sheet, validates it, and hands the browser a JSON
//! payload. The Sheets API key never leaves the server.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Builds the application router: health, the story API and, when
/// `static_dir` is given, the page shell as the fallback.
pub fn build_app(app_state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::story::router());

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.with_state(app_state)
}
