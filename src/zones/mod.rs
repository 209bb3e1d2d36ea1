// ABOUTME: Swim training zone domain types shared by the detector and the HTTP gateway
// ABOUTME: Defines zone identifiers, zone breakdowns, detection requests and result envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training Zones
//!
//! A swim session is reported as a percentage split across five intensity
//! zones, `z1` (recovery) to `z5` (sprint). The gateway returns the same
//! envelope on success and failure: failures carry zero-valued zones and an
//! `error` message, so a dashboard can render either without branching.

/// Zone detection through an LLM provider
pub mod detector;
/// Prompt templates for zone classification
pub mod prompts;
/// Request shape validation
pub mod validation;

pub use detector::{LlmZoneDetector, ZoneDetector};
pub use validation::ValidationError;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// One of the five training intensity zones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneId {
    /// Recovery, warm-up and cool-down
    Z1,
    /// Aerobic endurance
    Z2,
    /// Threshold
    Z3,
    /// VO2max
    Z4,
    /// Sprint and anaerobic
    Z5,
}

impl ZoneId {
    /// All zones from lowest to highest intensity
    pub const ALL: [Self; 5] = [Self::Z1, Self::Z2, Self::Z3, Self::Z4, Self::Z5];

    /// Wire key (`z1`..`z5`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Z1 => "z1",
            Self::Z2 => "z2",
            Self::Z3 => "z3",
            Self::Z4 => "z4",
            Self::Z5 => "z5",
        }
    }

    /// Short human label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Z1 => "Récupération",
            Self::Z2 => "Endurance aérobie",
            Self::Z3 => "Seuil",
            Self::Z4 => "VO2max",
            Self::Z5 => "Sprint / anaérobie",
        }
    }

    /// What sets fall into this zone, phrased for the classifier
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Z1 => "very easy swimming, warm-up, cool-down, drills, kick at easy pace, active rest",
            Self::Z2 => "steady aerobic swimming, long continuous sets, pull sets at moderate pace",
            Self::Z3 => "threshold / tempo efforts, CSS pace, repeats of 100-400m with short rest",
            Self::Z4 => "VO2max efforts, hard repeats of 50-200m near race pace with longer rest",
            Self::Z5 => "sprints, maximal efforts of 10-50m, race-pace and lactate tolerance work",
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage of session volume per zone
///
/// Values are kept as JSON numbers so a classifier answer is echoed with the
/// exact representation it arrived in (`20` stays `20`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneBreakdown {
    /// Zone 1 share
    #[serde(default = "zero_number")]
    pub z1: Number,
    /// Zone 2 share
    #[serde(default = "zero_number")]
    pub z2: Number,
    /// Zone 3 share
    #[serde(default = "zero_number")]
    pub z3: Number,
    /// Zone 4 share
    #[serde(default = "zero_number")]
    pub z4: Number,
    /// Zone 5 share
    #[serde(default = "zero_number")]
    pub z5: Number,
}

impl ZoneBreakdown {
    /// The zero-valued breakdown used by every failure envelope
    #[must_use]
    pub fn zero() -> Self {
        Self {
            z1: zero_number(),
            z2: zero_number(),
            z3: zero_number(),
            z4: zero_number(),
            z5: zero_number(),
        }
    }
}

impl Default for ZoneBreakdown {
    fn default() -> Self {
        Self::zero()
    }
}

fn zero_number() -> Number {
    Number::from(0_u8)
}

/// Session time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSlot {
    /// Morning session
    #[serde(rename = "AM")]
    Am,
    /// Afternoon or evening session
    #[serde(rename = "PM")]
    Pm,
}

impl TimeSlot {
    /// Parse the exact wire value
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "AM" => Some(Self::Am),
            "PM" => Some(Self::Pm),
            _ => None,
        }
    }

    /// Wire value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

/// A validated zone detection request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDetectionRequest {
    /// Free-text session description
    pub content: String,
    /// What the session is meant to develop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    /// Time of day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<TimeSlot>,
}

impl ZoneDetectionRequest {
    /// Request with only a session description
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            objective: None,
            time_slot: None,
        }
    }

    /// Attach an objective
    #[must_use]
    pub fn with_objective(mut self, objective: impl Into<String>) -> Self {
        self.objective = Some(objective.into());
        self
    }

    /// Attach a time slot
    #[must_use]
    pub const fn with_time_slot(mut self, time_slot: TimeSlot) -> Self {
        self.time_slot = Some(time_slot);
        self
    }
}

/// Zone classification of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDetectionResult {
    /// Percentage per zone
    pub zones: ZoneBreakdown,
    /// Classifier confidence, 0 to 1
    #[serde(default = "zero_number")]
    pub confidence: Number,
    /// Explanation of the split
    #[serde(default)]
    pub reasoning: String,
    /// Coaching suggestions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl ZoneDetectionResult {
    /// Zero-valued result with an explanation
    #[must_use]
    pub fn zeroed(reasoning: impl Into<String>) -> Self {
        Self {
            zones: ZoneBreakdown::zero(),
            confidence: zero_number(),
            reasoning: reasoning.into(),
            suggestions: None,
        }
    }
}

/// The JSON body returned by the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDetectionResponse {
    /// Result fields, flattened into the body
    #[serde(flatten)]
    pub result: ZoneDetectionResult,
    /// Failure message; absent on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ZoneDetectionResponse {
    /// Successful response carrying the classifier result untouched
    #[must_use]
    pub const fn success(result: ZoneDetectionResult) -> Self {
        Self {
            result,
            error: None,
        }
    }

    /// Failure response with zero zones
    #[must_use]
    pub fn failure(error: impl Into<String>, result: ZoneDetectionResult) -> Self {
        Self {
            result,
            error: Some(error.into()),
        }
    }
}
