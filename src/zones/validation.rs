// ABOUTME: Shape validation for incoming zone detection requests
// ABOUTME: Turns an arbitrary JSON body into a ZoneDetectionRequest or a ValidationError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;
use thiserror::Error;

use super::{TimeSlot, ZoneDetectionRequest};

/// Why a request body was rejected before reaching the classifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Body could not be read, typically because it exceeds the size limit
    #[error("request body could not be read: {0}")]
    UnreadableBody(String),
    /// Body is not JSON
    #[error("request body is not valid JSON: {0}")]
    MalformedJson(String),
    /// `content` is absent or `null`
    #[error("content is missing")]
    MissingContent,
    /// `content` has a non-string JSON type
    #[error("content must be a string, got {0}")]
    ContentNotString(&'static str),
    /// `content` is the empty string
    #[error("content is empty")]
    EmptyContent,
}

impl ZoneDetectionRequest {
    /// Parse a raw request body
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedJson`] when the bytes are not JSON,
    /// otherwise the errors of [`ZoneDetectionRequest::from_json`]
    pub fn from_body(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ValidationError::MalformedJson(e.to_string()))?;
        Self::from_json(&value)
    }

    /// Validate a JSON value against the request shape
    ///
    /// `content` must be a non-empty string; whitespace-only text is passed on
    /// to the classifier. A non-string `objective` and any
    /// `timeSlot` other than `"AM"`/`"PM"` are dropped rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the problem with `content`
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let content = match value.get("content") {
            None | Some(Value::Null) => return Err(ValidationError::MissingContent),
            Some(Value::String(content)) => content,
            Some(other) => return Err(ValidationError::ContentNotString(json_type_name(other))),
        };

        if content.is_empty() {
            return Err(ValidationError::EmptyContent);
        }

        let objective = value
            .get("objective")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|objective| !objective.is_empty())
            .map(str::to_owned);

        let time_slot = value
            .get("timeSlot")
            .and_then(Value::as_str)
            .and_then(TimeSlot::from_wire);

        Ok(Self {
            content: content.clone(),
            objective,
            time_slot,
        })
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
