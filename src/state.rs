// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Application state for holded-bridge

use crate::catalog::Catalog;
use crate::config::Config;
use crate::credentials::{ProviderChain, HOLDED_API_KEY};
use crate::error::ClientError;
use crate::holded::{Endpoints, HoldedClient};
use std::sync::Arc;

/// Shared, read-only application state.
///
/// Nothing here is mutated by requests; each request resolves its own
/// credential and builds its own [`HoldedClient`].
pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
    pub endpoints: Endpoints,
    pub credentials: ProviderChain,
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(
        config: Config,
        http: reqwest::Client,
        credentials: ProviderChain,
        catalog: Catalog,
    ) -> Result<Self, ClientError> {
        let endpoints = Endpoints::new(&config.projects_url, &config.team_url)?;
        Ok(Self {
            config,
            http,
            endpoints,
            credentials,
            catalog,
        })
    }

    /// Resolve the Holded API key and build a client bound to it
    pub async fn holded_client(&self) -> Result<HoldedClient, ClientError> {
        let key = self.credentials.resolve(HOLDED_API_KEY).await?;
        Ok(HoldedClient::new(
            self.http.clone(),
            self.endpoints.clone(),
            key,
        ))
    }
}

pub type SharedState = Arc<AppState>;
