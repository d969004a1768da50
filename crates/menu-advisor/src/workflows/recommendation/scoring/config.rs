use serde::{Deserialize, Serialize};

/// Thresholds and keyword lists consulted by the soft scoring rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Calorie ceiling (inclusive) for the low-calorie bonus.
    pub low_calorie_ceiling: f64,
    /// Calorie ceiling (inclusive) for the light-meal bonus.
    pub light_meal_calorie_ceiling: f64,
    /// Lower-case ingredient fragments that mark a dish as protein rich.
    pub protein_keywords: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            low_calorie_ceiling: 350.0,
            light_meal_calorie_ceiling: 400.0,
            protein_keywords: ["chicken", "egg", "paneer", "tofu", "fish", "lentil", "dal"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}
