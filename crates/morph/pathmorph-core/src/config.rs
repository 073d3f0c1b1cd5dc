//! Timing configuration applied to a host timer.

use serde::{Deserialize, Serialize};

use crate::curve::EasingCurve;
use crate::error::MorphError;

/// Duration, delay and curve for one morph run.
/// Missing fields fall back to the host platform defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Length of one run in milliseconds.
    pub duration_ms: u32,
    /// Wait before the first frame, in milliseconds.
    pub delay_ms: u32,
    pub curve: EasingCurve,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration_ms: 250,
            delay_ms: 0,
            curve: EasingCurve::Linear,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, MorphError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_curve(mut self, curve: EasingCurve) -> Self {
        self.curve = curve;
        self
    }
}
