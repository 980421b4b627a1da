//! Rule-based workout, diet, and hydration recommendations
//!
//! The engine is a total function of its two inputs: it never fails, and
//! implausible readings are fed through the arithmetic unchanged rather than
//! rejected. Rules run in a fixed order and append to a shared accumulator;
//! the resulting entry order in `workouts` is part of the observable
//! contract, so rules must not be reordered.

use tracing::debug;

use crate::config::EngineConfig;
use crate::models::{DailyStats, FitnessGoal, Recommendation, UserGoals};

/// Accumulator threaded through the rules in evaluation order.
#[derive(Debug, Default)]
struct RuleState {
    workouts: Vec<String>,
    diet: Vec<String>,
    reasoning: Vec<String>,
    confidence: f64,
}

// ============================================================================
// Rules
// ============================================================================

/// Sleep rule: short sleep swaps the day's main session for recovery work
/// and costs confidence. Exactly one of the two workouts is added.
fn sleep_rule(config: &EngineConfig, stats: &DailyStats, state: &mut RuleState) {
    if stats.sleep_minutes < config.sleep_minimum_minutes {
        state
            .reasoning
            .push("Sleep below 7h — prioritize recovery".to_string());
        state
            .workouts
            .push("Low-intensity 30–40 min zone-2 cardio".to_string());
        state.confidence -= config.confidence.sleep_deficit_penalty;
    } else {
        state
            .workouts
            .push("Moderate-intensity 45–60 min session".to_string());
    }
}

/// Heart-rate rule: additive only, never suppresses other rules.
fn heart_rate_rule(config: &EngineConfig, stats: &DailyStats, state: &mut RuleState) {
    if stats.avg_heart_rate > config.elevated_heart_rate_bpm {
        state
            .reasoning
            .push("Elevated avg HR — keep intensity moderate".to_string());
        state
            .workouts
            .push("Breathing drills + mobility 10 min".to_string());
    }
}

/// Steps rule: hitting the target exactly takes the else branch.
fn steps_rule(config: &EngineConfig, stats: &DailyStats, state: &mut RuleState) {
    if stats.steps < config.daily_step_target {
        state
            .workouts
            .push("Walk 6–8k steps (break into short bouts)".to_string());
    } else {
        state
            .workouts
            .push("Add 15 min brisk walk post-meal".to_string());
    }
}

/// Goal rule: two diet lines and one workout per goal. Unrecognized goal
/// labels have already collapsed to `GeneralHealth` at the model boundary.
fn goal_rule(goals: &UserGoals, state: &mut RuleState) {
    match goals.goal {
        FitnessGoal::LoseWeight => {
            state
                .diet
                .push("High-protein (1.6–2.2g/kg), calorie deficit ~10–15%".to_string());
            state
                .diet
                .push("Fiber-rich veggies, limit liquid calories".to_string());
            state
                .workouts
                .push("Full-body circuit x3, RPE 6–7".to_string());
        }
        FitnessGoal::BuildMuscle => {
            state
                .diet
                .push("Slight surplus 5–10%, 1.8–2.2g/kg protein".to_string());
            state.diet.push("Carbs around training".to_string());
            state
                .workouts
                .push("Compound lifts 5x5, accessory hypertrophy".to_string());
        }
        FitnessGoal::ImproveEndurance => {
            state
                .diet
                .push("Carb periodization for long sessions".to_string());
            state
                .diet
                .push("Electrolytes during >60 min workouts".to_string());
            state
                .workouts
                .push("Zone-2 45 min + intervals 6x2 min".to_string());
        }
        FitnessGoal::GeneralHealth => {
            state
                .diet
                .push("Balanced plate: 40% carbs, 30% protein, 30% fats".to_string());
            state
                .diet
                .push("Protein at each meal, mostly whole foods".to_string());
            state
                .workouts
                .push("3× weekly strength + daily walks".to_string());
        }
    }
}

/// Daily hydration target in liters: linear in steps around the pivot,
/// clamped to the band, rounded to one decimal.
pub fn hydration_target(config: &EngineConfig, steps: u32) -> f64 {
    let band = &config.hydration;
    let raw = band.baseline_liters
        + (f64::from(steps) - f64::from(band.pivot_steps)) / f64::from(band.band_steps);
    let clamped = raw.max(band.min_liters).min(band.max_liters);
    (clamped * 10.0).round() / 10.0
}

// ============================================================================
// Engine
// ============================================================================

/// Rule-based recommendation engine.
///
/// Stateless apart from its configuration profile; safe to share across
/// callers, every call returns a fresh [`Recommendation`].
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    /// Engine with the default production profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom profile; validate the profile first with
    /// [`EngineConfig::validate`]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The profile in effect
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Map a day of statistics and a stated goal to a coaching plan.
    ///
    /// Deterministic and side-effect-free: identical inputs yield identical
    /// output, and neither argument is modified.
    pub fn generate(&self, stats: &DailyStats, goals: &UserGoals) -> Recommendation {
        let config = &self.config;

        let mut state = RuleState {
            confidence: config.confidence.base,
            ..RuleState::default()
        };

        sleep_rule(config, stats, &mut state);
        heart_rate_rule(config, stats, &mut state);
        steps_rule(config, stats, &mut state);
        goal_rule(goals, &mut state);

        let hydration_liters = hydration_target(config, stats.steps);
        let confidence = state
            .confidence
            .max(config.confidence.min)
            .min(config.confidence.max);

        debug!(
            goal = %goals.goal,
            workouts = state.workouts.len(),
            reasoning = state.reasoning.len(),
            hydration_liters,
            confidence,
            "generated recommendation"
        );

        Recommendation {
            workouts: state.workouts,
            diet: state.diet,
            hydration_liters,
            reasoning: state.reasoning,
            confidence,
        }
    }
}

/// Generate a coaching plan with the default production profile.
pub fn generate_recommendations(stats: &DailyStats, goals: &UserGoals) -> Recommendation {
    RecommendationEngine::new().generate(stats, goals)
}
