//! Reference page endpoints.
//!
//! Resolves a page request and answers with a redirect or the page model
//! plus its pre-rendered content.

use std::sync::Arc;

use apiref_index::url;
use apiref_site::{PageModel, PageRequest, Resolution};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use md5::{Digest, Md5};
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response body for a resolved page.
#[derive(Serialize)]
struct PageResponse {
    #[serde(flatten)]
    page: PageModel,
    /// Pre-rendered HTML fragment, passed through untouched.
    content: String,
}

/// Handle GET /api/resolve?type=&name=&method=.
pub(crate) async fn get_resolve(
    Query(request): Query<PageRequest>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    resolve_impl(&request, &state, &headers)
}

/// Handle GET /api/reference/{type}/{name}.
pub(crate) async fn get_entry(
    Path((kind, name)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    resolve_impl(&PageRequest::new(kind, name), &state, &headers)
}

/// Handle GET /api/reference/{type}/{name}/{method}.
pub(crate) async fn get_method(
    Path((kind, name, method)): Path<(String, String, String)>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let request = PageRequest::new(kind, name).with_method(method);
    resolve_impl(&request, &state, &headers)
}

/// Handle GET /reference/{*path}, the canonical page URLs that redirects
/// point at.
pub(crate) async fn get_canonical(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let full_path = format!("{}{path}", url::REFERENCE_ROOT);
    let parsed =
        url::parse_reference_path(&full_path).ok_or(ServerError::PageNotFound(full_path))?;

    let request = PageRequest {
        kind: Some(parsed.kind.url_segment().to_owned()),
        name: Some(parsed.name),
        method: parsed.method,
    };
    resolve_impl(&request, &state, &headers)
}

fn resolve_impl(
    request: &PageRequest,
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Response, ServerError> {
    let page = match state.reference.resolve(request)? {
        Resolution::Redirect { location } => {
            return Ok(
                (StatusCode::PERMANENT_REDIRECT, [(header::LOCATION, location)]).into_response(),
            );
        }
        Resolution::Page(page) => page,
    };

    let etag = compute_etag(&state.version, &page.content_ref);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let content = state.reference.read_content(&page.content_ref)?;

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Json(PageResponse { page, content }),
    )
        .into_response())
}

/// Compute `ETag` from version and content reference.
///
/// Fragments are immutable build outputs, so the reference stands in for
/// the content. MD5 truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content_ref: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content_ref}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
