use super::domain::{DietaryRestriction, EatingStyle, PreferenceProfile};
use crate::workflows::menu::DishRecord;

const GENERIC_REASON: &str = "Matches your overall preferences.";
const INGREDIENT_PREVIEW: usize = 3;

/// Extend the scored reasons of a winning dish with unscored context for the diner.
pub(crate) fn explain(
    dish: &DishRecord,
    preferences: &PreferenceProfile,
    scored_reasons: Vec<String>,
) -> Vec<String> {
    let mut explanation = if scored_reasons.is_empty() {
        vec![GENERIC_REASON.to_string()]
    } else {
        scored_reasons
    };

    if let Some(region) = dish
        .enrichment
        .region
        .as_deref()
        .filter(|region| !region.trim().is_empty())
    {
        explanation.push(format!("Belongs to the {region} cuisine."));
    }

    if preferences.dietary_type == DietaryRestriction::VegetarianOnly {
        explanation.push("Follows your vegetarian preference.".to_string());
    }

    if preferences.has_preferred_cuisines() {
        explanation.push("Aligns with cuisines you usually enjoy.".to_string());
    }

    if preferences.eating_style == EatingStyle::Experimental {
        explanation.push("Encourages you to try something new.".to_string());
    }

    let ingredients = &dish.enrichment.ingredients;
    if !ingredients.is_empty() {
        let preview = ingredients
            .iter()
            .take(INGREDIENT_PREVIEW)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        explanation.push(format!("Key ingredients include {preview}."));
    }

    explanation
}
