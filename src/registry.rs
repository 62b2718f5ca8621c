// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Publishing descriptors to the host's action and card registries

use crate::catalog::{ActionDescriptor, CardDescriptor, Catalog};
use crate::error::RegistrationError;
use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

type Result<T> = std::result::Result<T, RegistrationError>;

/// Supplies the token the host expects on registered actions.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> Result<String>;
}

/// Token fixed at startup.
pub struct StaticToken(pub String);

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

#[async_trait]
pub trait Registry: Send + Sync {
    async fn add_action(&self, action: &ActionDescriptor) -> Result<()>;
    async fn add_card(&self, card: &CardDescriptor) -> Result<()>;
}

/// Host registry reached over HTTP.
pub struct HttpRegistry {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpRegistry {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    async fn post<T: Serialize + Sync>(
        &self,
        collection: &str,
        name: &str,
        body: &T,
    ) -> Result<()> {
        let url = format!("{}/api/core/v1/{}", self.base_url, collection);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(|source| RegistrationError::Transport {
                name: name.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RegistrationError::Rejected {
                name: name.to_string(),
                status,
                body,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Registry for HttpRegistry {
    async fn add_action(&self, action: &ActionDescriptor) -> Result<()> {
        self.post("actions", action.name, action).await
    }

    async fn add_card(&self, card: &CardDescriptor) -> Result<()> {
        self.post("cards", &card.id, card).await
    }
}

/// Register every action, then every card. Stops at the first failure.
pub async fn register_catalog(registry: &dyn Registry, catalog: &Catalog) -> Result<()> {
    for action in &catalog.actions {
        registry.add_action(action).await?;
    }
    for card in &catalog.cards {
        registry.add_card(card).await?;
    }
    info!(
        actions = catalog.actions.len(),
        cards = catalog.cards.len(),
        "Registered Holded descriptors"
    );
    Ok(())
}
