// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Project handlers

use crate::error::{Result, UpstreamContext};
use crate::holded::params::prune_empty;
use crate::holded::Payload;
use crate::state::SharedState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;

/// GET /api/v1/holded/projects - Projects, every query parameter forwarded as a filter
pub async fn list(
    State(state): State<SharedState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<Value>> {
    const FAILED: &str = "Failed to fetch projects";

    // Repeated parameters keep their first value.
    let mut filters = Payload::new();
    for (key, value) in query {
        filters.entry(key).or_insert(Value::String(value));
    }
    let filters = prune_empty(filters);

    let client = state.holded_client().await.or_upstream(FAILED)?;
    let projects = client.list_projects(&filters).await.or_upstream(FAILED)?;

    Ok(Json(projects))
}
