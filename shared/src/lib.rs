//! Health Advisor Shared Library
//!
//! This crate contains the health metrics engine, the recommendation
//! tables, input validation and the API types shared by the backend and
//! WASM modules.

pub mod errors;
pub mod health_metrics;
pub mod models;
pub mod recommendations;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use models::{AdviceSource, AdviceType};
pub use recommendations::{
    get_diet_recommendations, get_exercise_recommendations, get_lifestyle_recommendations,
    DietRecommendations, ExerciseRecommendations, Goal, LifestyleRecommendations,
    Recommendations,
};
pub use types::*;
