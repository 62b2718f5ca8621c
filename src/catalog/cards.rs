// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Card descriptors: UI widgets bound to one action each

use super::actions::{self, GROUP};
use super::params;
use super::rules::CardRules;
use serde::Serialize;
use serde_json::{Map, Value};

const COLOR: &str = "#ED4C46";

const UPDATABLE_FIELDS: &[&str] = &[
    "duration",
    "desc",
    "costHour",
    "date",
    "start",
    "end",
    "userId",
    "taskId",
    "categoryId",
    "billable",
];

const PROJECT_FILTERS: &[&str] = &["name", "status", "archived", "customerId", "page", "limit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Number,
}

/// One input field rendered by the card
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigParam {
    pub visible: bool,
    pub default_value: &'static str,
    #[serde(rename = "type")]
    pub kind: InputKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
}

impl ConfigParam {
    fn text(visible: bool, label: &'static str) -> Self {
        Self {
            visible,
            default_value: "",
            kind: InputKind::Text,
            label: Some(label),
        }
    }

    fn number(visible: bool, label: &'static str) -> Self {
        Self {
            kind: InputKind::Number,
            ..Self::text(visible, label)
        }
    }

    fn default_value(mut self, value: &'static str) -> Self {
        self.default_value = value;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefaults {
    pub width: u32,
    pub height: u32,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub params: Map<String, Value>,
    pub rules: CardRules,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "ordered_params")]
    pub config_params: Vec<(&'static str, ConfigParam)>,
}

fn ordered_params<S: serde::Serializer>(
    entries: &[(&'static str, ConfigParam)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(entries.iter().map(|(k, v)| (*k, v)))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDescriptor {
    pub group: &'static str,
    pub tag: &'static str,
    pub id: String,
    pub template_name: &'static str,
    /// Name of the action this card triggers
    pub name: &'static str,
    pub defaults: CardDefaults,
    pub emit_event: bool,
}

impl CardDescriptor {
    fn new(action: &'static str, template_name: &'static str, defaults: CardDefaults) -> Self {
        Self {
            group: GROUP,
            tag: "table",
            id: format!("{action}_request"),
            template_name,
            name: action,
            defaults,
            emit_event: true,
        }
    }
}

fn defaults(
    height: u32,
    name: &'static str,
    icon: &'static str,
    description: &'static str,
) -> CardDefaults {
    CardDefaults {
        width: 3,
        height,
        name,
        icon,
        color: COLOR,
        description,
        kind: "action",
        params: Map::new(),
        rules: CardRules::default(),
        config_params: Vec::new(),
    }
}

/// Each card's `params` maps a field to the user input of the same name.
fn identity_params(fields: &[&str]) -> Map<String, Value> {
    let pairs: Vec<(&str, &str)> = fields.iter().map(|f| (*f, *f)).collect();
    params(&pairs)
}

pub fn cards() -> Vec<CardDescriptor> {
    vec![update_project_time(), projects(), register_time(), employees(), project_time_slots()]
}

fn update_project_time() -> CardDescriptor {
    let mut fields = vec!["projectId", "timeTrackingId"];
    fields.extend_from_slice(UPDATABLE_FIELDS);

    let mut d = defaults(
        6,
        "update project time",
        "clock",
        "Updates one or more fields of a project time tracking entry",
    );
    d.params = identity_params(&fields);
    d.rules = CardRules::default()
        .required(&["projectId", "timeTrackingId"])
        .optional(UPDATABLE_FIELDS)
        .numeric(&["duration", "costHour"])
        .boolean(&["billable"])
        .require_any_optional();
    d.config_params = vec![
        ("projectId", ConfigParam::text(true, "Project ID *")),
        ("timeTrackingId", ConfigParam::text(true, "Time Tracking ID *")),
        ("duration", ConfigParam::number(true, "Duration (seconds)")),
        ("desc", ConfigParam::text(false, "Description")),
        ("costHour", ConfigParam::number(false, "Cost/hour")),
        ("date", ConfigParam::text(false, "Date (YYYY-MM-DD or ISO)")),
        ("start", ConfigParam::text(false, "Start (ISO)")),
        ("end", ConfigParam::text(false, "End (ISO)")),
        ("userId", ConfigParam::text(false, "User ID")),
        ("taskId", ConfigParam::text(false, "Task ID")),
        ("categoryId", ConfigParam::text(false, "Category ID")),
        ("billable", ConfigParam::text(false, "Billable (true/false)")),
    ];

    CardDescriptor::new(actions::UPDATE_PROJECT_TIME, "Edit Holded time entry", d)
}

fn projects() -> CardDescriptor {
    let mut d = defaults(5, "Holded projects", "list", "List of projects from Holded");
    d.params = identity_params(PROJECT_FILTERS);
    d.rules = CardRules::default().optional(PROJECT_FILTERS);
    d.config_params = vec![
        ("name", ConfigParam::text(true, "Name (contains)")),
        ("status", ConfigParam::text(true, "Status")),
        ("archived", ConfigParam::text(true, "Archived (true/false)")),
        ("customerId", ConfigParam::text(true, "Customer ID")),
        ("page", ConfigParam::number(true, "Page")),
        ("limit", ConfigParam::number(true, "Limit")),
    ];

    CardDescriptor::new(actions::PROJECTS, "Holded projects", d)
}

fn register_time() -> CardDescriptor {
    let fields = ["projectId", "userId", "duration"];
    let mut d = defaults(
        5,
        "Register project time",
        "clock",
        "Registers a time interval (duration in seconds) on a Holded project",
    );
    d.params = identity_params(&fields);
    d.rules = CardRules::default().required(&fields).numeric(&["duration"]);
    d.config_params = vec![
        ("projectId", ConfigParam::text(true, "Project ID")),
        ("userId", ConfigParam::text(true, "User ID")),
        (
            "duration",
            ConfigParam::number(true, "Duration (seconds)").default_value("3600"),
        ),
    ];

    CardDescriptor::new(actions::REGISTER_TIME, "Register time in Holded", d)
}

fn employees() -> CardDescriptor {
    let d = defaults(5, "Holded employees", "users", "List of employees from Holded");
    CardDescriptor::new(actions::EMPLOYEES, "Holded employees", d)
}

fn project_time_slots() -> CardDescriptor {
    let mut d = defaults(
        5,
        "Holded project time slots",
        "clock",
        "Time intervals of a project from Holded",
    );
    d.params = identity_params(&["projectId"]);
    d.rules = CardRules::default().required(&["projectId"]);
    d.config_params = vec![(
        "projectId",
        ConfigParam {
            label: None,
            ..ConfigParam::text(true, "")
        },
    )];

    CardDescriptor::new(actions::PROJECT_TIME_SLOTS, "Holded time entries", d)
}
