//! HTTP request handlers.

use crate::covers::{Dimensions, GeneratedArtifact, ImageRequest};
use crate::error::Result;
use crate::server::AppState;
use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::Response,
};

/// Build a response, returning 500 on error (which shouldn't happen).
fn artifact_response(artifact: GeneratedArtifact) -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, artifact.mime_type())
        .header(header::CACHE_CONTROL, artifact.cache.header_value())
        .header(header::CONTENT_LENGTH, artifact.bytes.len())
        .body(Body::from(artifact.bytes))
        .unwrap_or_else(|_| {
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(Body::from("Internal error"))
                .unwrap_or_default()
        })
}

/// Query parameters for cover requests.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CoverQuery {
    /// Book identifier seeding the placeholder.
    pub book_id: Option<String>,
    /// Quality 1-100; anything unparsable falls back to the default.
    pub q: Option<String>,
}

impl CoverQuery {
    /// Pick parameters out of raw query pairs. The first occurrence of a
    /// repeated key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "bookId" if query.book_id.is_none() => query.book_id = Some(value),
                "q" if query.q.is_none() => query.q = Some(value),
                _ => {}
            }
        }
        query
    }
}

/// Cover image: processed source file or generated placeholder.
///
/// `/covers/{width}/{height}/{*path}`, where `path` is either a file below
/// the cover root or `@placeholder`.
pub async fn cover(
    State(state): State<AppState>,
    Path((width, height, path)): Path<(String, String, String)>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response<Body>> {
    let query = CoverQuery::from_pairs(pairs);
    let request = ImageRequest::parse(
        &width,
        &height,
        &path,
        query.book_id,
        query.q.as_deref(),
        state.default_quality(),
    )?;

    let artifact = state.pipeline.cover(request).await?;
    Ok(artifact_response(artifact))
}

/// Decorative vector placeholder.
pub async fn placeholder(
    State(state): State<AppState>,
    Path((width, height)): Path<(String, String)>,
) -> Result<Response<Body>> {
    let dimensions = Dimensions::parse(&width, &height)?;
    Ok(artifact_response(state.pipeline.open_book(dimensions)))
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
