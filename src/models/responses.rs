// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Response models for holded-bridge API

use serde::Serialize;

/// Health check and status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Service is healthy
    pub healthy: bool,
    /// Bridge version
    pub version: &'static str,
    /// Number of published action descriptors
    pub actions: usize,
    /// Number of published card descriptors
    pub cards: usize,
}
