//! FitTrack Engine
//!
//! This crate contains the rule-based recommendation engine ("AI coach") and
//! the pure calculations around it: weekly aggregation of workout samples and
//! the simulated sensor stream used by the landing-page preview.
//!
//! Everything here is synchronous, deterministic computation. Fetching
//! samples, rendering output, and managing user sessions belong to the
//! surrounding application, not to this crate.

pub mod config;
pub mod engine;
pub mod errors;
pub mod models;
pub mod sim;
pub mod stats;

// Re-export commonly used items
pub use config::*;
pub use engine::{generate_recommendations, hydration_target, RecommendationEngine};
pub use errors::*;
pub use models::*;
