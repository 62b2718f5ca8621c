// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! Declarative input rules carried by card descriptors
//!
//! Cards describe how user input is checked and shaped before the host calls
//! the matching action. The rules are plain data so the host can evaluate
//! them without running code shipped by this bridge; [`CardRules::apply`] is
//! the reference evaluation.

use crate::holded::params::{coerce_number, is_empty, Payload};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRules {
    /// Fields that must be present and non-empty, checked in order.
    pub required: Vec<&'static str>,
    /// Allow-list of fields forwarded only when non-empty.
    pub optional: Vec<&'static str>,
    /// Fields converted to JSON numbers.
    pub numeric: Vec<&'static str>,
    /// Fields converted to booleans (`"true"`, any case, is true).
    pub boolean: Vec<&'static str>,
    /// At least one optional field must survive.
    pub require_any_optional: bool,
}

impl CardRules {
    pub fn required(mut self, fields: &[&'static str]) -> Self {
        self.required = fields.to_vec();
        self
    }

    pub fn optional(mut self, fields: &[&'static str]) -> Self {
        self.optional = fields.to_vec();
        self
    }

    pub fn numeric(mut self, fields: &[&'static str]) -> Self {
        self.numeric = fields.to_vec();
        self
    }

    pub fn boolean(mut self, fields: &[&'static str]) -> Self {
        self.boolean = fields.to_vec();
        self
    }

    pub fn require_any_optional(mut self) -> Self {
        self.require_any_optional = true;
        self
    }

    /// Validate `input` and build the payload for the card's action.
    ///
    /// Unknown fields are dropped. Errors are the message shown to the user.
    pub fn apply(&self, input: &Payload) -> Result<Payload, String> {
        let mut payload = Payload::new();

        for &field in &self.required {
            let value = match input.get(field) {
                Some(v) if !is_empty(v) => v,
                _ => return Err(format!("{field} parameter is required")),
            };
            payload.insert(field.to_string(), self.convert(field, value)?);
        }

        let mut kept = 0;
        for &field in &self.optional {
            if let Some(value) = input.get(field).filter(|v| !is_empty(v)) {
                payload.insert(field.to_string(), self.convert(field, value)?);
                kept += 1;
            }
        }

        if self.require_any_optional && kept == 0 {
            return Err("Provide at least one updatable field".to_string());
        }
        Ok(payload)
    }

    fn convert(&self, field: &str, value: &Value) -> Result<Value, String> {
        if self.numeric.iter().any(|f| *f == field) {
            return coerce_number(value)
                .map(Value::Number)
                .ok_or_else(|| format!("{field} must be a number"));
        }
        if self.boolean.iter().any(|f| *f == field) {
            let text = match value {
                Value::Bool(b) => return Ok(Value::Bool(*b)),
                Value::String(s) => s.to_lowercase(),
                other => other.to_string(),
            };
            return Ok(Value::Bool(text == "true"));
        }
        Ok(value.clone())
    }
}
