use serde_derive::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tuning knobs of the tracker. Every field has a default, so an empty
/// config (or `{}` on the wire) is usable as is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Frames a track may stay unmatched before it is evicted.
    pub max_disappeared: u32,
    /// Minimum matching gate distance.
    pub base_search_radius: f32,
    /// Upper clamp for the adaptive gate.
    pub max_search_radius: f32,
    /// Radius gain per unit of speed (units per frame).
    pub speed_factor: f32,
    /// Radius gain per consecutive missed frame.
    pub growth_factor: f32,
    /// Exponential smoothing factor of the velocity estimate.
    pub smoothing: f32,
    pub initial_confidence: f32,
    pub confidence_gain: f32,
    pub confidence_decay: f32,
    /// Matched frames needed before a track counts as established.
    pub min_track_length: u32,
    /// Cap of the centroid trail kept per track.
    pub history_len: usize,
    pub first_id: u64,
    /// Seconds per nominal frame, used to turn timestamps into steps.
    pub frame_interval: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_disappeared: 15,
            base_search_radius: 50.0,
            max_search_radius: 250.0,
            speed_factor: 2.0,
            growth_factor: 5.0,
            smoothing: 0.5,
            initial_confidence: 0.5,
            confidence_gain: 0.1,
            confidence_decay: 0.1,
            min_track_length: 3,
            history_len: 50,
            first_id: 1,
            frame_interval: 1.0 / 30.0,
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> Error {
    Error::InvalidConfig {
        field,
        reason: reason.into(),
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(field, format!("expected finite value >= 0, got {}", value)));
    }

    Ok(())
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.base_search_radius.is_finite() || self.base_search_radius <= 0.0 {
            return Err(invalid(
                "base_search_radius",
                format!("expected finite value > 0, got {}", self.base_search_radius),
            ));
        }

        if !self.max_search_radius.is_finite() || self.max_search_radius < self.base_search_radius
        {
            return Err(invalid(
                "max_search_radius",
                format!(
                    "must be finite and >= base_search_radius ({}), got {}",
                    self.base_search_radius, self.max_search_radius
                ),
            ));
        }

        non_negative("speed_factor", self.speed_factor)?;
        non_negative("growth_factor", self.growth_factor)?;
        non_negative("confidence_gain", self.confidence_gain)?;
        non_negative("confidence_decay", self.confidence_decay)?;

        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(invalid(
                "smoothing",
                format!("expected value in (0, 1], got {}", self.smoothing),
            ));
        }

        if !(0.0..=1.0).contains(&self.initial_confidence) {
            return Err(invalid(
                "initial_confidence",
                format!("expected value in [0, 1], got {}", self.initial_confidence),
            ));
        }

        if self.history_len == 0 {
            return Err(invalid("history_len", "must be at least 1"));
        }

        if !self.frame_interval.is_finite() || self.frame_interval <= 0.0 {
            return Err(invalid(
                "frame_interval",
                format!("expected finite value > 0, got {}", self.frame_interval),
            ));
        }

        Ok(())
    }
}
