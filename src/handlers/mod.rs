// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! HTTP request handlers

pub mod catalog;
pub mod employees;
pub mod projects;
pub mod status;
pub mod time;

pub mod routes {
    pub const EMPLOYEES: &str = "/api/v1/holded/employees";
    pub const PROJECT_TIME_SLOTS: &str = "/api/v1/holded/project_time_slots";
    pub const REGISTER_TIME: &str = "/api/v1/holded/register_time";
    pub const PROJECTS: &str = "/api/v1/holded/projects";
    pub const UPDATE_PROJECT_TIME: &str = "/api/v1/holded/update_project_time";
    pub const CATALOG: &str = "/api/v1/holded/catalog";
}
