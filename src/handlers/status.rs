// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Status handler

use crate::models::StatusResponse;
use crate::state::SharedState;
use axum::{extract::State, Json};

/// GET /status - Health check and status information
pub async fn status(State(state): State<SharedState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION"),
        actions: state.catalog.actions.len(),
        cards: state.catalog.cards.len(),
    })
}
