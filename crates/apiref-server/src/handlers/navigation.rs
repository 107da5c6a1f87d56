//! Navigation API endpoint.
//!
//! Returns the sidebar tree for the whole reference.

use std::sync::Arc;

use apiref_site::NavNode;
use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Page kind nodes below the reference root.
    items: Vec<NavNode>,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NavigationResponse>, ServerError> {
    let tree = state.reference.navigation()?;
    Ok(Json(NavigationResponse {
        items: tree.children.clone(),
    }))
}
