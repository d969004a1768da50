use serde::{Deserialize, Serialize};

use super::super::domain::{DietaryRestriction, PreferenceProfile};
use crate::workflows::menu::DishRecord;

/// Why a dish was removed from consideration before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Diner eats vegetarian only and the dish is not vegetarian.
    NotVegetarian,
    /// Diner eats non-vegetarian only and the dish is vegetarian.
    Vegetarian,
}

impl ExclusionReason {
    pub fn summary(&self) -> &'static str {
        match self {
            ExclusionReason::NotVegetarian => "excluded: dish is not vegetarian",
            ExclusionReason::Vegetarian => "excluded: dish is vegetarian",
        }
    }
}

pub(crate) fn exclusion_for(
    dish: &DishRecord,
    preferences: &PreferenceProfile,
) -> Option<ExclusionReason> {
    match (preferences.dietary_type, dish.enrichment.is_veg) {
        (DietaryRestriction::VegetarianOnly, false) => Some(ExclusionReason::NotVegetarian),
        (DietaryRestriction::NonVegetarianOnly, true) => Some(ExclusionReason::Vegetarian),
        _ => None,
    }
}
