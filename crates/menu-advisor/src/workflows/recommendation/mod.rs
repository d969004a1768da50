//! Preference matching: scores dishes against a diner profile and picks the best ones.
//!
//! [`scoring::DishScorer`] judges one dish at a time. [`DishSelector`] runs it over a menu,
//! either for a single overall pick or once per requested course, and
//! [`RecommendationService`] wraps both for the HTTP and CLI surfaces.

pub mod domain;
mod narrative;
pub mod router;
pub mod scoring;
pub mod selector;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    CoursePreference, DietaryRestriction, EatingStyle, HealthGoal, PreferenceProfile,
};
pub use router::{recommendation_router, RecommendationRequest};
pub use scoring::{
    DishScorer, ExclusionReason, ScoreComponent, ScoreFactor, ScoreOutcome, ScoreResult,
    ScoringConfig,
};
pub use selector::{
    CoursePlan, CourseRecommendation, DishSelector, Recommendation, RecommendationResult,
    UPSTREAM_ERROR_MESSAGE,
};
pub use service::RecommendationService;
pub use views::{DishPick, DishScoreView, DishView, RecommendationMode, RecommendationReport};

/// Error raised when a recommendation request cannot be evaluated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecommendationError {
    #[error("budget must be a finite, non-negative amount (got {0})")]
    InvalidBudget(f64),
}
