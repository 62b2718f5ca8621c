// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Error types for holded-bridge

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Errors returned to HTTP callers.
///
/// `Upstream` only ever carries the fixed per-endpoint message; the detail of
/// the underlying [`ClientError`] is logged and never serialized.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Upstream(&'static str),
}

/// Failures talking to Holded or resolving the credential for it.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request to Holded failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Holded returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Holded returned a body that is not JSON: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error("invalid base URL {url}: {reason}")]
    BaseUrl { url: String, reason: String },

    #[error("no value found for key {0}")]
    MissingCredential(String),

    #[error("credential lookup for {name} failed: {reason}")]
    Credential { name: String, reason: String },
}

/// Failures while publishing descriptors to the host registries.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("registry request for {name} failed: {source}")]
    Transport {
        name: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("registry rejected {name} with {status}: {body}")]
    Rejected {
        name: String,
        status: reqwest::StatusCode,
        body: String,
    },
}

impl ApiError {
    /// A 400 for a missing or malformed field, logged at debug level.
    pub fn invalid(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(reason = %message, "Rejected request");
        ApiError::InvalidRequest(message)
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Converts a remote failure into the generic error for one endpoint,
/// logging the detail on the way.
pub trait UpstreamContext<T> {
    fn or_upstream(self, message: &'static str) -> Result<T>;
}

impl<T> UpstreamContext<T> for std::result::Result<T, ClientError> {
    fn or_upstream(self, message: &'static str) -> Result<T> {
        self.map_err(|e| {
            tracing::error!(error = %e, "{}", message);
            ApiError::Upstream(message)
        })
    }
}
