//! Engine thresholds and bands
//!
//! The rule constants live here rather than inline in the rules so that
//! alternate profiles can be loaded from configuration and validated before
//! use. The defaults reproduce the production constants exactly; engine
//! output for a given input is fully determined by the profile in effect.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Hydration target band: linear in steps around a pivot, clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationBand {
    /// Liters recommended at exactly `pivot_steps`.
    pub baseline_liters: f64,
    /// Step count at which the baseline applies.
    pub pivot_steps: u32,
    /// Steps per liter of swing away from the baseline.
    pub band_steps: u32,
    /// Lower clamp in liters.
    pub min_liters: f64,
    /// Upper clamp in liters.
    pub max_liters: f64,
}

impl Default for HydrationBand {
    fn default() -> Self {
        Self {
            baseline_liters: 2.0,
            pivot_steps: 6000,
            band_steps: 6000,
            min_liters: 1.8,
            max_liters: 3.5,
        }
    }
}

/// Confidence accumulator band.
///
/// Only the sleep rule adjusts confidence today, so the reachable values are
/// `base` and `base - sleep_deficit_penalty`; the clamp is kept for rules
/// that widen the range later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBand {
    pub base: f64,
    pub sleep_deficit_penalty: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for ConfidenceBand {
    fn default() -> Self {
        Self {
            base: 0.70,
            sleep_deficit_penalty: 0.05,
            min: 0.50,
            max: 0.95,
        }
    }
}

/// Thresholds and bands driving the recommendation rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Sleep below this many minutes triggers the recovery branch (7h).
    pub sleep_minimum_minutes: u32,
    /// Average heart rate above this triggers the moderation branch.
    pub elevated_heart_rate_bpm: f64,
    /// Step counts below this trigger the step-goal branch.
    pub daily_step_target: u32,
    pub hydration: HydrationBand,
    pub confidence: ConfidenceBand,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sleep_minimum_minutes: 420,
            elevated_heart_rate_bpm: 85.0,
            daily_step_target: 8000,
            hydration: HydrationBand::default(),
            confidence: ConfidenceBand::default(),
        }
    }
}

impl EngineConfig {
    /// Validate a profile before handing it to the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let h = &self.hydration;
        if h.min_liters > h.max_liters {
            return Err(ConfigError::HydrationBand(format!(
                "min {} exceeds max {}",
                h.min_liters, h.max_liters
            )));
        }
        if h.band_steps == 0 {
            return Err(ConfigError::HydrationBand(
                "band_steps must be positive".to_string(),
            ));
        }
        if !h.baseline_liters.is_finite() || h.baseline_liters < 0.0 {
            return Err(ConfigError::HydrationBand(format!(
                "baseline {} must be a non-negative number",
                h.baseline_liters
            )));
        }

        let c = &self.confidence;
        if c.min > c.max {
            return Err(ConfigError::ConfidenceBand(format!(
                "min {} exceeds max {}",
                c.min, c.max
            )));
        }
        if c.min < 0.0 || c.max > 1.0 {
            return Err(ConfigError::ConfidenceBand(format!(
                "bounds [{}, {}] must lie within [0, 1]",
                c.min, c.max
            )));
        }
        if !c.base.is_finite() || !c.sleep_deficit_penalty.is_finite() {
            return Err(ConfigError::ConfidenceBand(
                "base and penalty must be finite".to_string(),
            ));
        }

        if !self.elevated_heart_rate_bpm.is_finite() {
            return Err(ConfigError::Threshold(
                "elevated_heart_rate_bpm must be finite".to_string(),
            ));
        }

        Ok(())
    }
}
