// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Descriptors published to the host platform
//!
//! Building the catalog has no side effects: `main` decides whether to push it
//! to a registry, and `/api/v1/holded/catalog` serves it for hosts that pull.

pub mod actions;
pub mod cards;
pub mod rules;

pub use actions::{ActionDescriptor, ActionMethod};
pub use cards::CardDescriptor;
pub use rules::CardRules;

use serde::Serialize;
use serde_json::{Map, Value};

fn params(entries: &[(&str, &str)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub actions: Vec<ActionDescriptor>,
    pub cards: Vec<CardDescriptor>,
}

impl Catalog {
    /// Descriptors pointing at `public_url` (or bare paths when `None`),
    /// with every action carrying `token`.
    pub fn build(public_url: Option<&str>, token: &str) -> Self {
        let prefix = public_url.unwrap_or("").trim_end_matches('/');
        Self {
            actions: actions::actions(|path| format!("{prefix}{path}"), token),
            cards: cards::cards(),
        }
    }

    pub fn card(&self, name: &str) -> Option<&CardDescriptor> {
        self.cards.iter().find(|c| c.name == name)
    }
}
