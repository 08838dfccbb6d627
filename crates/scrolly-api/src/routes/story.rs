//! Route serving the validated story.

use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use chrono::{DateTime, Utc};
use scrolly_core::error::ScrollyError;
use scrolly_story::application::pipeline::{PreparedStory, prepare_story};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for GET /api/v1/story.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryResponse {
    /// Story record and steps.
    #[serde(flatten)]
    pub prepared: PreparedStory,
    /// SHA-256 of the serialized story and steps, also sent as the `ETag`.
    pub version_hash: String,
    /// When the rows were fetched.
    pub fetched_at: DateTime<Utc>,
}

/// Hex SHA-256 over the JSON form of `prepared`.
///
/// # Errors
///
/// Returns an internal error if the story cannot be serialized.
pub fn version_hash(prepared: &PreparedStory) -> Result<String, ScrollyError> {
    let bytes = serde_json::to_vec(prepared)
        .map_err(|e| ScrollyError::internal("Hashing story payload", &e))?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}

/// GET /story
#[instrument(skip_all)]
async fn get_story(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "fetching story");

    let rows = state.row_source.fetch_rows().await?;
    let prepared = prepare_story(&rows)?;
    let hash = version_hash(&prepared)?;
    let etag = format!("\"{hash}\"");

    info!(%correlation_id, steps = prepared.steps.len(), version_hash = %hash, "story prepared");

    let etag_value = HeaderValue::from_str(&etag)
        .map_err(|e| ScrollyError::internal("Building story response", &e))?;

    let unchanged = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == etag);
    if unchanged {
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag_value)]).into_response());
    }

    let body = StoryResponse {
        prepared,
        version_hash: hash,
        fetched_at: state.clock.now(),
    };
    Ok(([(header::ETAG, etag_value)], Json(body)).into_response())
}

/// Returns the router for the story API.
pub fn router() -> Router<AppState> {
    Router::new().route("/story", get(get_story))
}
