// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Action descriptors: programmatic entry points the host can invoke

use super::params;
use crate::handlers::routes;
use serde::Serialize;
use serde_json::{Map, Value};

pub const GROUP: &str = "holded";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionMethod {
    Get,
    Post,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDescriptor {
    pub group: &'static str,
    pub tag: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub url: String,
    /// Parameter name to human readable description
    pub params: Map<String, Value>,
    pub emit_event: bool,
    pub receive_board: bool,
    pub token: String,
    pub method: ActionMethod,
}

impl ActionDescriptor {
    fn new(
        name: &'static str,
        description: &'static str,
        url: String,
        method: ActionMethod,
        token: &str,
    ) -> Self {
        Self {
            group: GROUP,
            tag: GROUP,
            name,
            description,
            url,
            params: Map::new(),
            emit_event: true,
            receive_board: false,
            token: token.to_string(),
            method,
        }
    }

    fn params(mut self, entries: &[(&str, &str)]) -> Self {
        self.params = params(entries);
        self
    }
}

pub const UPDATE_PROJECT_TIME: &str = "holded_update_project_time";
pub const PROJECTS: &str = "holded_projects";
pub const REGISTER_TIME: &str = "holded_register_time";
pub const EMPLOYEES: &str = "holded_employees";
pub const PROJECT_TIME_SLOTS: &str = "holded_project_time_slots";

/// The five Holded actions. `url_for` turns a route path into the URL the
/// host should call.
pub fn actions(url_for: impl Fn(&str) -> String, token: &str) -> Vec<ActionDescriptor> {
    vec![
        ActionDescriptor::new(
            UPDATE_PROJECT_TIME,
            "Updates a time tracking entry of a Holded project",
            url_for(routes::UPDATE_PROJECT_TIME),
            ActionMethod::Post,
            token,
        )
        .params(&[
            ("projectId", "Project ID (required)"),
            ("timeTrackingId", "Time tracking ID (required)"),
            ("duration", "Duration in seconds (optional)"),
            ("desc", "Description (optional)"),
            ("costHour", "Cost per hour (optional)"),
            ("date", "Date, YYYY-MM-DD or ISO (optional)"),
            ("start", "Start, ISO (optional)"),
            ("end", "End, ISO (optional)"),
            ("userId", "User ID (optional)"),
            ("taskId", "Task ID (optional)"),
            ("categoryId", "Category ID (optional)"),
            ("billable", "true/false (optional)"),
        ]),
        ActionDescriptor::new(
            PROJECTS,
            "Lists Holded projects",
            url_for(routes::PROJECTS),
            ActionMethod::Get,
            token,
        )
        .params(&[
            ("name", "Filter by name (optional)"),
            ("status", "Status (optional)"),
            ("archived", "true/false (optional)"),
            ("customerId", "Customer ID (optional)"),
            ("page", "Page (optional)"),
            ("limit", "Limit (optional)"),
        ]),
        ActionDescriptor::new(
            REGISTER_TIME,
            "Registers a time interval on a Holded project",
            url_for(routes::REGISTER_TIME),
            ActionMethod::Post,
            token,
        )
        .params(&[
            ("projectId", "Project ID"),
            ("userId", "User ID"),
            ("duration", "Duration (number of seconds)"),
        ]),
        ActionDescriptor::new(
            EMPLOYEES,
            "Lists Holded employees",
            url_for(routes::EMPLOYEES),
            ActionMethod::Get,
            token,
        ),
        ActionDescriptor::new(
            PROJECT_TIME_SLOTS,
            "Lists the time intervals of a Holded project",
            url_for(routes::PROJECT_TIME_SLOTS),
            ActionMethod::Get,
            token,
        )
        .params(&[("projectId", "Project ID")]),
    ]
}
