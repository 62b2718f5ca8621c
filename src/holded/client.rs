// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the Holded projects and team APIs

use super::params::{query_pairs, Payload};
use crate::error::ClientError;
use reqwest::{header::ACCEPT, RequestBuilder, Url};
use serde_json::{json, Number, Value};

type Result<T> = std::result::Result<T, ClientError>;

/// Base URLs of the two Holded APIs this bridge talks to.
#[derive(Debug, Clone)]
pub struct Endpoints {
    projects: Url,
    team: Url,
}

impl Endpoints {
    pub fn new(projects: &str, team: &str) -> Result<Self> {
        Ok(Self {
            projects: parse_base(projects)?,
            team: parse_base(team)?,
        })
    }
}

fn parse_base(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| ClientError::BaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ClientError::BaseUrl {
            url: raw.to_string(),
            reason: "not a base URL".to_string(),
        });
    }
    Ok(url)
}

/// Client bound to a single Holded API key.
///
/// Cheap to build: the connection pool lives in the shared [`reqwest::Client`].
pub struct HoldedClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    key: String,
}

impl HoldedClient {
    pub fn new(http: reqwest::Client, endpoints: Endpoints, key: String) -> Self {
        Self {
            http,
            endpoints,
            key,
        }
    }

    /// GET team/employees
    pub async fn list_employees(&self) -> Result<Value> {
        let url = join(&self.endpoints.team, &["employees"]);
        self.send(self.http.get(url)).await
    }

    /// GET projects, with empty filters left out of the query string
    pub async fn list_projects(&self, filters: &Payload) -> Result<Value> {
        let url = join(&self.endpoints.projects, &["projects"]);
        let pairs = query_pairs(filters);
        let mut request = self.http.get(url);
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }
        self.send(request).await
    }

    /// POST projects/{id}/times
    pub async fn register_time(
        &self,
        project_id: &str,
        user_id: &str,
        duration: Number,
    ) -> Result<Value> {
        let url = join(&self.endpoints.projects, &["projects", project_id, "times"]);
        let body = json!({ "userId": user_id, "duration": duration });
        self.send(self.http.post(url).json(&body)).await
    }

    /// GET projects/{id}/times
    pub async fn project_time_slots(&self, project_id: &str) -> Result<Value> {
        let url = join(&self.endpoints.projects, &["projects", project_id, "times"]);
        self.send(self.http.get(url)).await
    }

    /// PUT projects/{id}/times/{timeTrackingId}
    pub async fn update_project_time(
        &self,
        project_id: &str,
        time_tracking_id: &str,
        fields: &Payload,
    ) -> Result<Value> {
        let url = join(
            &self.endpoints.projects,
            &["projects", project_id, "times", time_tracking_id],
        );
        self.send(self.http.put(url).json(fields)).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value> {
        let response = request
            .header(ACCEPT, "application/json")
            .header("key", &self.key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status { status, body });
        }
        serde_json::from_str(&body).map_err(ClientError::InvalidBody)
    }
}

/// Append path segments to a base URL, percent-encoding each one.
fn join(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
