mod config;
mod policy;
mod rules;

pub use config::ScoringConfig;
pub use policy::ExclusionReason;

use super::domain::PreferenceProfile;
use crate::workflows::menu::DishRecord;
use serde::{Deserialize, Serialize};

/// Stateless scorer that applies the exclusion policy and soft rules to one dish.
#[derive(Debug, Clone, Default)]
pub struct DishScorer {
    config: ScoringConfig,
}

impl DishScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, dish: &DishRecord, preferences: &PreferenceProfile) -> ScoreOutcome {
        if let Some(reason) = policy::exclusion_for(dish, preferences) {
            return ScoreOutcome::Excluded { reason };
        }

        let components = rules::score_dish(dish, preferences, &self.config);
        ScoreOutcome::Scored(ScoreResult::from_components(components))
    }
}

/// Rule family a score adjustment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    HealthGoal,
    Cuisine,
    EatingStyle,
    Budget,
    Course,
    Spice,
}

/// Discrete contribution to a dish score, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub score: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Composite score of a dish with the reasons earned along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: i16,
    pub reasons: Vec<String>,
    pub components: Vec<ScoreComponent>,
}

impl ScoreResult {
    pub fn from_components(components: Vec<ScoreComponent>) -> Self {
        let score = components.iter().map(|component| component.score).sum();
        let reasons = components
            .iter()
            .filter_map(|component| component.reason.clone())
            .collect();

        Self {
            score,
            reasons,
            components,
        }
    }
}

/// Scorer verdict: either removed from consideration or ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScoreOutcome {
    Excluded { reason: ExclusionReason },
    Scored(ScoreResult),
}

impl ScoreOutcome {
    pub fn is_excluded(&self) -> bool {
        matches!(self, ScoreOutcome::Excluded { .. })
    }

    pub fn scored(&self) -> Option<&ScoreResult> {
        match self {
            ScoreOutcome::Scored(result) => Some(result),
            ScoreOutcome::Excluded { .. } => None,
        }
    }

    pub fn into_scored(self) -> Option<ScoreResult> {
        match self {
            ScoreOutcome::Scored(result) => Some(result),
            ScoreOutcome::Excluded { .. } => None,
        }
    }
}
