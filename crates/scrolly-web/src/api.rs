//! Client for the story endpoint.

use gloo_net::http::Request;
use scrolly_core::error::{ErrorKind, ScrollyError};
use scrolly_story::application::pipeline::PreparedStory;
use serde::Deserialize;

/// Error body sent by the server for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    action: String,
    message: String,
    #[serde(default)]
    hint: Option<String>,
}

fn kind_from_code(code: &str) -> ErrorKind {
    match code {
        "validation_error" => ErrorKind::Validation,
        "fetch_error" => ErrorKind::Fetch,
        _ => ErrorKind::Internal,
    }
}

impl From<ErrorBody> for ScrollyError {
    fn from(body: ErrorBody) -> Self {
        let err = Self::new(kind_from_code(&body.error), body.action, body.message);
        match body.hint {
            Some(hint) => err.with_hint(hint),
            None => err,
        }
    }
}

/// Turns a failed response into the error to display.
///
/// Bodies that are not the server's error shape still produce an error that
/// names the status.
fn error_from_response(url: &str, status: u16, body: &str) -> ScrollyError {
    serde_json::from_str::<ErrorBody>(body).map_or_else(
        |_| ScrollyError::fetch(fetch_action(url), format!("The server answered with status {status}")),
        ScrollyError::from,
    )
}

fn fetch_action(url: &str) -> String {
    format!("Fetching story from {url}")
}

/// Fetches and decodes the validated story.
///
/// # Errors
///
/// Returns the server's error when it rejected the story, or a fetch error if
/// the request or decoding failed.
pub(crate) async fn fetch_story(url: &str) -> Result<PreparedStory, ScrollyError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ScrollyError::fetch(fetch_action(url), e.to_string()))?;

    let text = response
        .text()
        .await
        .map_err(|e| ScrollyError::fetch(fetch_action(url), e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(url, response.status(), &text));
    }

    serde_json::from_str(&text).map_err(|e| ScrollyError::fetch(fetch_action(url), e.to_string()))
}
