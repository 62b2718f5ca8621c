// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Employee handlers

use crate::error::{Result, UpstreamContext};
use crate::state::SharedState;
use axum::{extract::State, Json};
use serde_json::Value;

/// GET /api/v1/holded/employees - Employees as returned by Holded
pub async fn list(State(state): State<SharedState>) -> Result<Json<Value>> {
    const FAILED: &str = "Failed to fetch employees";

    let client = state.holded_client().await.or_upstream(FAILED)?;
    let employees = client.list_employees().await.or_upstream(FAILED)?;

    Ok(Json(employees))
}
