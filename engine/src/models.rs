//! Data models for the recommendation engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// One day of physiological and activity statistics.
///
/// Values arrive as the statistics source computed them. The engine never
/// rejects out-of-range readings; implausible values flow through the
/// arithmetic unchanged, which downstream consumers rely on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub steps: u32,
    /// Average heart rate in beats per minute.
    pub avg_heart_rate: f64,
    /// Minutes of sleep in the measurement window.
    pub sleep_minutes: u32,
    /// Kilocalories.
    pub calories: f64,
}

/// Stated fitness goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    LoseWeight,
    BuildMuscle,
    ImproveEndurance,
    /// Catch-all; unrecognized wire values land here.
    #[default]
    #[serde(other)]
    GeneralHealth,
}

impl FitnessGoal {
    /// Get the wire label for this goal
    pub fn label(&self) -> &'static str {
        match self {
            FitnessGoal::LoseWeight => "lose_weight",
            FitnessGoal::BuildMuscle => "build_muscle",
            FitnessGoal::ImproveEndurance => "improve_endurance",
            FitnessGoal::GeneralHealth => "general_health",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            FitnessGoal::LoseWeight => "Lose weight",
            FitnessGoal::BuildMuscle => "Build muscle",
            FitnessGoal::ImproveEndurance => "Improve endurance",
            FitnessGoal::GeneralHealth => "General health",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for FitnessGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose_weight" => Ok(FitnessGoal::LoseWeight),
            "build_muscle" => Ok(FitnessGoal::BuildMuscle),
            "improve_endurance" => Ok(FitnessGoal::ImproveEndurance),
            "general_health" => Ok(FitnessGoal::GeneralHealth),
            _ => Err(format!("Unknown fitness goal: {}", s)),
        }
    }
}

/// Goal settings from the user's profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct UserGoals {
    pub goal: FitnessGoal,
    /// Reserved for future weekly-volume rules; not consumed yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub weekly_target_minutes: Option<f64>,
}

impl UserGoals {
    /// Goals with no weekly volume target set
    pub fn for_goal(goal: FitnessGoal) -> Self {
        Self {
            goal,
            weekly_target_minutes: None,
        }
    }
}

/// Daily coaching plan produced by the engine.
///
/// Constructed fresh on every call and owned solely by the caller. `workouts`
/// and `diet` are never empty; `reasoning` may be. Entry order follows rule
/// evaluation order and is part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub workouts: Vec<String>,
    pub diet: Vec<String>,
    /// Daily hydration target in liters, rounded to one decimal.
    pub hydration_liters: f64,
    pub reasoning: Vec<String>,
    /// Confidence in the plan, within [0.5, 0.95].
    pub confidence: f64,
}
