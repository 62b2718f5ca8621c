// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Project time tracking handlers

use crate::error::{ApiError, Result, UpstreamContext};
use crate::holded::params::{coerce_number, is_empty, prune_empty, required_text};
use crate::holded::Payload;
use crate::state::SharedState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;

/// A body that is missing or not a JSON object is treated as empty, so the
/// caller gets the field-level validation message.
fn payload(body: Option<Json<Payload>>) -> Payload {
    body.map(|Json(p)| p).unwrap_or_default()
}

/// GET /api/v1/holded/project_time_slots?projectId= - Time entries of a project
pub async fn time_slots(
    State(state): State<SharedState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<Value>> {
    const FAILED: &str = "Failed to fetch project time slots";

    // Repeated parameters keep their first value, as on /projects.
    let project_id = query
        .into_iter()
        .find(|(key, _)| key == "projectId")
        .map(|(_, value)| value)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::invalid("projectId query parameter is required"))?;

    let client = state.holded_client().await.or_upstream(FAILED)?;
    let slots = client
        .project_time_slots(&project_id)
        .await
        .or_upstream(FAILED)?;

    Ok(Json(slots))
}

/// POST /api/v1/holded/register_time - Register a duration on a project
pub async fn register(
    State(state): State<SharedState>,
    body: Option<Json<Payload>>,
) -> Result<Json<Value>> {
    const FAILED: &str = "Failed to register time slot";

    let body = payload(body);
    let (Some(project_id), Some(user_id), Some(duration)) = (
        required_text(&body, "projectId"),
        required_text(&body, "userId"),
        body.get("duration").filter(|v| !is_empty(v)),
    ) else {
        return Err(ApiError::invalid("Required parameters: projectId, userId, duration"));
    };
    let duration = coerce_number(duration)
        .ok_or_else(|| ApiError::invalid("duration must be a number of seconds"))?;

    let client = state.holded_client().await.or_upstream(FAILED)?;
    let result = client
        .register_time(&project_id, &user_id, duration)
        .await
        .or_upstream(FAILED)?;

    Ok(Json(result))
}

/// POST /api/v1/holded/update_project_time - Update fields of a time entry
pub async fn update(
    State(state): State<SharedState>,
    body: Option<Json<Payload>>,
) -> Result<Json<Value>> {
    const FAILED: &str = "Failed to update project time";

    let mut body = payload(body);
    let project_id = required_text(&body, "projectId")
        .ok_or_else(|| ApiError::invalid("projectId is required"))?;
    let time_tracking_id = required_text(&body, "timeTrackingId")
        .ok_or_else(|| ApiError::invalid("timeTrackingId is required"))?;

    body.remove("projectId");
    body.remove("timeTrackingId");
    let fields = prune_empty(body);
    if fields.is_empty() {
        return Err(ApiError::invalid("Provide at least one field to update"));
    }

    let client = state.holded_client().await.or_upstream(FAILED)?;
    let result = client
        .update_project_time(&project_id, &time_tracking_id, &fields)
        .await
        .or_upstream(FAILED)?;

    Ok(Json(result))
}
