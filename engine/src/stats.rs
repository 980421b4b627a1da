//! Weekly aggregation of workout samples
//!
//! The dashboard folds a time-ordered week of samples into a single
//! [`DailyStats`] before invoking the engine. The window is a fixed seven
//! slots: absent days contribute zeros, so a short week averages down rather
//! than erroring, matching the dashboard's behavior for sparse data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::DailyStats;

/// Slots in the aggregation window.
pub const DAYS_PER_WEEK: usize = 7;

/// One day's raw sample as supplied by the statistics source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSample {
    pub recorded_at: DateTime<Utc>,
    pub steps: u32,
    pub avg_heart_rate: f64,
    pub sleep_minutes: u32,
    pub calories: f64,
}

/// Aggregates over the seven-slot window. Averages are rounded to whole
/// units, the way the dashboard tiles display them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub total_steps: u64,
    pub avg_heart_rate: f64,
    pub avg_sleep_minutes: u32,
    pub avg_calories: f64,
}

impl WeeklySummary {
    /// Engine input for an average day of this week.
    pub fn daily_stats(&self) -> DailyStats {
        DailyStats {
            steps: (self.total_steps as f64 / DAYS_PER_WEEK as f64).round() as u32,
            avg_heart_rate: self.avg_heart_rate,
            sleep_minutes: self.avg_sleep_minutes,
            calories: self.avg_calories,
        }
    }
}

/// Fold up to a week of samples into window totals and averages.
///
/// Samples are taken in order; entries beyond the seventh are ignored and
/// missing days count as zero.
pub fn weekly_summary(samples: &[WorkoutSample]) -> WeeklySummary {
    let days = DAYS_PER_WEEK as f64;

    let mut total_steps: u64 = 0;
    let mut heart_rate_sum = 0.0;
    let mut sleep_sum: u64 = 0;
    let mut calorie_sum = 0.0;

    for sample in samples.iter().take(DAYS_PER_WEEK) {
        total_steps += u64::from(sample.steps);
        heart_rate_sum += sample.avg_heart_rate;
        sleep_sum += u64::from(sample.sleep_minutes);
        calorie_sum += sample.calories;
    }

    WeeklySummary {
        total_steps,
        avg_heart_rate: (heart_rate_sum / days).round(),
        avg_sleep_minutes: (sleep_sum as f64 / days).round() as u32,
        avg_calories: (calorie_sum / days).round(),
    }
}

/// Trailing moving average for chart series.
pub fn moving_average(values: &[f64], window_size: usize) -> Vec<f64> {
    if values.is_empty() || window_size == 0 {
        return vec![];
    }

    let mut result = Vec::with_capacity(values.len());

    for i in 0..values.len() {
        let start = if i >= window_size { i - window_size + 1 } else { 0 };
        let window = &values[start..=i];
        let avg = window.iter().sum::<f64>() / window.len() as f64;
        result.push(avg);
    }

    result
}
