// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Credential lookup: key stores tried in order, environment last

use crate::error::ClientError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ClientError>;

/// Name of the key holding the Holded API key.
pub const HOLDED_API_KEY: &str = "HOLDED_API_KEY";

/// A source of named secrets.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// `Ok(None)` means "not here, ask the next provider".
    async fn lookup(&self, name: &str) -> Result<Option<String>>;
}

/// Reads the process environment on every lookup.
pub struct EnvVar;

#[async_trait]
impl CredentialProvider for EnvVar {
    async fn lookup(&self, name: &str) -> Result<Option<String>> {
        Ok(std::env::var(name).ok())
    }
}

/// Fixed set of keys, usually loaded from a JSON file.
#[derive(Debug, Default)]
pub struct KeyFile {
    keys: HashMap<String, String>,
}

impl KeyFile {
    pub fn new(keys: HashMap<String, String>) -> Self {
        Self { keys }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let keys = serde_json::from_str(&raw)?;
        Ok(Self { keys })
    }
}

#[async_trait]
impl CredentialProvider for KeyFile {
    async fn lookup(&self, name: &str) -> Result<Option<String>> {
        Ok(self.keys.get(name).cloned())
    }
}

#[derive(serde::Deserialize)]
struct StoredKey {
    value: Option<String>,
}

/// Key store exposed over HTTP by the host platform.
pub struct HostKeyStore {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HostKeyStore {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl CredentialProvider for HostKeyStore {
    async fn lookup(&self, name: &str) -> Result<Option<String>> {
        let url = format!(
            "{}/api/core/v1/keys/{}",
            self.base_url.trim_end_matches('/'),
            name
        );
        let response = self
            .http
            .get(&url)
            .query(&[("token", self.token.as_str())])
            .send()
            .await
            .map_err(|e| lookup_failed(name, e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ClientError::Credential {
                name: name.to_string(),
                reason: format!("key store returned {}", response.status()),
            });
        }

        let stored: StoredKey = response.json().await.map_err(|e| lookup_failed(name, e))?;
        Ok(stored.value)
    }
}

/// The request URL carries the service token, so it is stripped from the error.
fn lookup_failed(name: &str, e: reqwest::Error) -> ClientError {
    ClientError::Credential {
        name: name.to_string(),
        reason: e.without_url().to_string(),
    }
}

/// Ordered providers; the first non-empty value wins.
#[derive(Clone, Default)]
pub struct ProviderChain {
    providers: Vec<Arc<dyn CredentialProvider>>,
}

impl ProviderChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, provider: impl CredentialProvider + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Resolve `name`, failing with [`ClientError::MissingCredential`] when
    /// no provider has a non-empty value.
    pub async fn resolve(&self, name: &str) -> Result<String> {
        for provider in &self.providers {
            match provider.lookup(name).await? {
                Some(value) if !value.is_empty() => return Ok(value),
                _ => continue,
            }
        }
        Err(ClientError::MissingCredential(name.to_string()))
    }
}
