//! Request handlers for the content-type service.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::AppState;
use super::error::HttpError;

/// Body of a successful `/health` response.
#[derive(Debug, Serialize)]
pub struct HealthBody {
    /// Always `"ok"`.
    pub status: &'static str,
}

/// Query parameters accepted by `/content-type`.
#[derive(Debug, Deserialize)]
pub struct ContentTypeParams {
    /// The URL to resolve. Missing parameter is a 400, not a probe attempt.
    pub url: Option<String>,
}

/// Body of a successful `/content-type` response.
#[derive(Debug, Serialize)]
pub struct ContentTypeBody {
    /// The final URL the content type was read from (redirect target when
    /// one was found, otherwise the requested URL).
    pub url: String,
    /// The Content-Type header value, verbatim.
    pub content_type: String,
}

/// `GET /health` - static liveness check.
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

/// `GET /content-type?url=<URL>` - resolve one redirect hop, then report the
/// content type of the final URL.
pub async fn content_type(
    State(engine): State<AppState>,
    Query(params): Query<ContentTypeParams>,
) -> Result<Json<ContentTypeBody>, HttpError> {
    // `?url=` with no value arrives as Some(""); treat it the same as absent.
    let Some(target_url) = params.url.filter(|url| !url.is_empty()) else {
        return Err(HttpError::BadRequest(
            "Missing `url` query parameter".to_string(),
        ));
    };

    let redirected = engine.resolve_redirect(&target_url).await?;
    let final_url = redirected.unwrap_or(target_url);
    let content_type = engine.resolve_content_type(&final_url).await?;

    info!(url = %final_url, content_type = %content_type, "content type resolved");
    Ok(Json(ContentTypeBody {
        url: final_url,
        content_type,
    }))
}
