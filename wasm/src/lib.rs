//! FitTrack WASM Module
//!
//! This crate provides WebAssembly bindings so the dashboard and landing
//! page can run the coach client-side, without a server round-trip.

use wasm_bindgen::prelude::*;

use fittrack_engine::engine::{generate_recommendations, hydration_target};
use fittrack_engine::{DailyStats, EngineConfig, UserGoals};

/// Run the recommendation engine and return the plan as a JSON string.
///
/// Unknown goal labels fall back to `general_health`; this function never
/// throws.
#[wasm_bindgen]
pub fn recommend(
    steps: u32,
    avg_heart_rate: f64,
    sleep_minutes: u32,
    calories: f64,
    goal: &str,
) -> String {
    let stats = DailyStats {
        steps,
        avg_heart_rate,
        sleep_minutes,
        calories,
    };
    let goals = UserGoals::for_goal(goal.parse().unwrap_or_default());

    let rec = generate_recommendations(&stats, &goals);
    serde_json::to_string(&rec).unwrap_or_else(|_| "{}".to_string())
}

/// Daily hydration target in liters for a step count
#[wasm_bindgen]
pub fn daily_hydration_liters(steps: u32) -> f64 {
    hydration_target(&EngineConfig::default(), steps)
}

/// Calculate moving average for a chart series
#[wasm_bindgen]
pub fn calculate_moving_average(values: &[f64], window_size: usize) -> Vec<f64> {
    fittrack_engine::stats::moving_average(values, window_size)
}

/// Step series for the landing-page activity preview, as a JSON string
#[wasm_bindgen]
pub fn activity_preview(seed: u64, days: usize) -> String {
    let points = fittrack_engine::sim::activity_preview(seed, days);
    serde_json::to_string(&points).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_returns_parsable_plan() {
        let json = recommend(7500, 90.0, 390, 2100.0, "lose_weight");
        let rec: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(rec["workouts"].as_array().unwrap().len(), 4);
        assert_eq!(rec["diet"].as_array().unwrap().len(), 2);
        assert_eq!(rec["hydration_liters"], 2.3);
    }

    #[test]
    fn test_recommend_accepts_unknown_goal() {
        let json = recommend(10_000, 70.0, 480, 2400.0, "not_a_goal");
        let rec: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(rec["workouts"][2], "3× weekly strength + daily walks");
    }

    #[test]
    fn test_hydration_band() {
        assert_eq!(daily_hydration_liters(6000), 2.0);
        assert_eq!(daily_hydration_liters(0), 1.8);
        assert_eq!(daily_hydration_liters(20_000), 3.5);
    }

    #[test]
    fn test_moving_average() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = calculate_moving_average(&values, 3);
        assert_eq!(result.len(), 5);
        assert!((result[2] - 2.0).abs() < 0.001); // avg of [1,2,3]
        assert!((result[4] - 4.0).abs() < 0.001); // avg of [3,4,5]
    }

    #[test]
    fn test_activity_preview_json() {
        let json = activity_preview(9, 14);
        let points: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(points.as_array().unwrap().len(), 14);
        assert_eq!(points[0]["label"], "1");
    }
}
