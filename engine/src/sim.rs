//! Simulated live sensor stream
//!
//! The landing page previews the coach with a synthetic wearable: counters
//! that drift once per second. Simulators are seedable so tests and demo
//! recordings reproduce exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::DailyStats;

/// Sleep stops accruing once the counter reaches eight hours.
const SLEEP_FULL_MINUTES: u32 = 480;

/// Synthetic live stats, advanced one second per tick.
#[derive(Debug, Clone)]
pub struct LiveStatsSimulator {
    steps: u32,
    calories: f64,
    heart_rate: f64,
    sleep_minutes: u32,
    rng: StdRng,
}

impl LiveStatsSimulator {
    /// Simulator with an arbitrary seed
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Reproducible simulator
    pub fn with_seed(seed: u64) -> Self {
        Self {
            steps: 0,
            calories: 0.0,
            heart_rate: 72.0,
            sleep_minutes: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Advance one second and return the current snapshot.
    ///
    /// Steps and calories accumulate, heart rate is resampled in 60–100 bpm,
    /// and sleep climbs until it reaches eight hours.
    pub fn tick(&mut self) -> DailyStats {
        self.steps += self.rng.gen_range(0..=20);
        self.calories += self.rng.gen_range(0.0..0.8);
        self.heart_rate = f64::from(self.rng.gen_range(60u32..=100));
        if self.sleep_minutes < SLEEP_FULL_MINUTES {
            self.sleep_minutes += self.rng.gen_range(0..=3);
        }
        self.snapshot()
    }

    /// Current stats without advancing.
    pub fn snapshot(&self) -> DailyStats {
        DailyStats {
            steps: self.steps,
            avg_heart_rate: self.heart_rate,
            sleep_minutes: self.sleep_minutes,
            calories: self.calories.round(),
        }
    }
}

impl Default for LiveStatsSimulator {
    fn default() -> Self {
        Self::new()
    }
}

/// One day's worth of steps for the landing-page preview chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewPoint {
    pub label: String,
    pub steps: u32,
}

/// Step series for the landing-page activity preview: one point per day,
/// uniformly in 4000–11000 steps.
pub fn activity_preview(seed: u64, days: usize) -> Vec<PreviewPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=days)
        .map(|day| PreviewPoint {
            label: day.to_string(),
            steps: 4000 + rng.gen_range(0..=7000),
        })
        .collect()
}
