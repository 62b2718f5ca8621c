// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Descriptor catalog handler

use crate::catalog::Catalog;
use crate::state::SharedState;
use axum::{extract::State, Json};

/// GET /api/v1/holded/catalog - Action and card descriptors for the host
pub async fn catalog(State(state): State<SharedState>) -> Json<Catalog> {
    Json(state.catalog.clone())
}
