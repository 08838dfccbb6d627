//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use scrolly_core::source::{RowSource, SheetRows};
use scrolly_test_support::{FailingRowSource, FixedClock, StaticRowSource};
use tower::ServiceExt;

use scrolly_api::state::AppState;

/// Fixed timestamp used across all integration tests.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
}

/// Build the full app router around `row_source` with a fixed clock. Uses
/// the same route structure as `main.rs`.
pub fn build_test_app(row_source: Arc<dyn RowSource>) -> Router {
    let app_state = AppState::new(Arc::new(FixedClock(fixed_now())), row_source);
    scrolly_api::build_app(app_state, None)
}

/// Build the app serving the real page shell as the fallback.
pub fn build_test_app_with_shell(row_source: Arc<dyn RowSource>) -> Router {
    let app_state = AppState::new(Arc::new(FixedClock(fixed_now())), row_source);
    let shell = Path::new(env!("CARGO_MANIFEST_DIR")).join("static");
    scrolly_api::build_app(app_state, Some(&shell))
}

/// App whose sheet holds `rows`.
pub fn app_with_rows(rows: SheetRows) -> Router {
    build_test_app(Arc::new(StaticRowSource(rows)))
}

/// App whose sheet cannot be reached.
pub fn app_with_unreachable_sheet() -> Router {
    build_test_app(Arc::new(FailingRowSource::unreachable()))
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|cell| (*cell).to_string()).collect()
}

/// A small valid sheet: story row plus header and three steps.
pub fn valid_rows() -> SheetRows {
    SheetRows {
        story_row: row(&[
            "scrolly",
            "Tides",
            "A year at sea",
            "The end",
            "40%",
            "A. Writer",
            "",
        ]),
        step_rows: vec![
            row(&[
                "contentType",
                "filePath",
                "altText",
                "latitude",
                "longitude",
                "zoomLevel",
                "text",
            ]),
            row(&["image", "https://example.com/a.png", "Harbour", "", "", "1.2", "Morning"]),
            row(&["map", "", "The bay", "37.8", "-122.4", "9", "Out to sea"]),
            row(&["text", "", "", "", "", "", "Meanwhile"]),
        ],
    }
}

/// Send a GET request and return status, headers and raw body.
pub async fn get(
    app: Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, HeaderMap, Vec<u8>) {
    let mut request = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }
    let request = request.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, headers, body_bytes.to_vec())
}

/// Send a GET request and return the status and JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = get(app, uri, &[]).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}
