use super::super::domain::{CoursePreference, EatingStyle, HealthGoal, PreferenceProfile};
use super::config::ScoringConfig;
use super::{ScoreComponent, ScoreFactor};
use crate::workflows::menu::{DishRecord, SpiceLevel};

const HEALTH_MATCH: i16 = 15;
const HEALTH_MISS: i16 = -5;
const LIGHT_SPICE_BONUS: i16 = 10;
const LIGHT_CALORIE_BONUS: i16 = 5;
const LOW_SPICE_PENALTY: i16 = -15;
const CUISINE_MATCH: i16 = 15;
const CUISINE_MISS: i16 = -5;
const STYLE_MATCH: i16 = 10;
const STYLE_MISS: i16 = -10;
const WITHIN_BUDGET: i16 = 10;
const OVER_BUDGET: i16 = -20;
const FULL_MEAL_BONUS: i16 = 5;
const COURSE_MATCH: i16 = 15;
const COURSE_MISS: i16 = -10;
const SPICE_MATCH: i16 = 5;
const SPICE_CLASH: i16 = -50;

/// Apply the soft rules in display order. Exclusions are handled before this is called.
pub(crate) fn score_dish(
    dish: &DishRecord,
    preferences: &PreferenceProfile,
    config: &ScoringConfig,
) -> Vec<ScoreComponent> {
    let mut components = Vec::new();

    score_health_goal(dish, preferences, config, &mut components);

    let cuisine_match = preferences.prefers_cuisine(&dish.enrichment.cuisine);
    score_cuisine(preferences, cuisine_match, &mut components);
    score_eating_style(preferences, cuisine_match, &mut components);

    score_budget(dish, preferences, &mut components);
    score_course(dish, preferences, &mut components);
    score_spice(dish, preferences, &mut components);

    components
}

fn push(
    components: &mut Vec<ScoreComponent>,
    factor: ScoreFactor,
    score: i16,
    reason: Option<String>,
) {
    components.push(ScoreComponent {
        factor,
        score,
        reason,
    });
}

fn score_health_goal(
    dish: &DishRecord,
    preferences: &PreferenceProfile,
    config: &ScoringConfig,
    components: &mut Vec<ScoreComponent>,
) {
    let calories = dish.enrichment.calories_approx;
    let spice = dish.enrichment.spice_level;

    match preferences.health_goal {
        HealthGoal::NoPreference => {}
        HealthGoal::LowCalorie => match calories {
            Some(kcal) if kcal <= config.low_calorie_ceiling => push(
                components,
                ScoreFactor::HealthGoal,
                HEALTH_MATCH,
                Some("Low in calories.".to_string()),
            ),
            _ => push(components, ScoreFactor::HealthGoal, HEALTH_MISS, None),
        },
        HealthGoal::HighProtein => {
            let ingredients = dish.enrichment.ingredients.join(" ").to_lowercase();
            if config
                .protein_keywords
                .iter()
                .any(|keyword| ingredients.contains(keyword.as_str()))
            {
                push(
                    components,
                    ScoreFactor::HealthGoal,
                    HEALTH_MATCH,
                    Some("High protein content.".to_string()),
                );
            }
        }
        HealthGoal::LightAndEasy => {
            if spice == Some(SpiceLevel::Low) {
                push(
                    components,
                    ScoreFactor::HealthGoal,
                    LIGHT_SPICE_BONUS,
                    Some("Light and easy to digest.".to_string()),
                );
            }
            if calories.is_some_and(|kcal| kcal <= config.light_meal_calorie_ceiling) {
                push(
                    components,
                    ScoreFactor::HealthGoal,
                    LIGHT_CALORIE_BONUS,
                    None,
                );
            }
        }
        HealthGoal::LowSpice => match spice {
            Some(SpiceLevel::Low) => push(
                components,
                ScoreFactor::HealthGoal,
                HEALTH_MATCH,
                Some("Low spice as preferred.".to_string()),
            ),
            Some(SpiceLevel::High) => {
                push(components, ScoreFactor::HealthGoal, LOW_SPICE_PENALTY, None)
            }
            _ => {}
        },
    }
}

fn score_cuisine(
    preferences: &PreferenceProfile,
    cuisine_match: bool,
    components: &mut Vec<ScoreComponent>,
) {
    if !preferences.has_preferred_cuisines() {
        return;
    }

    if cuisine_match {
        push(
            components,
            ScoreFactor::Cuisine,
            CUISINE_MATCH,
            Some("Matches your preferred cuisine.".to_string()),
        );
    } else {
        push(components, ScoreFactor::Cuisine, CUISINE_MISS, None);
    }
}

fn score_eating_style(
    preferences: &PreferenceProfile,
    cuisine_match: bool,
    components: &mut Vec<ScoreComponent>,
) {
    match (preferences.eating_style, cuisine_match) {
        (EatingStyle::Familiar, true) => push(
            components,
            ScoreFactor::EatingStyle,
            STYLE_MATCH,
            Some("Familiar taste for you.".to_string()),
        ),
        (EatingStyle::Familiar, false) => {
            push(components, ScoreFactor::EatingStyle, STYLE_MISS, None)
        }
        (EatingStyle::Experimental, false) => push(
            components,
            ScoreFactor::EatingStyle,
            STYLE_MATCH,
            Some("Something new to explore!".to_string()),
        ),
        _ => {}
    }
}

fn score_budget(
    dish: &DishRecord,
    preferences: &PreferenceProfile,
    components: &mut Vec<ScoreComponent>,
) {
    if dish.price_amount() <= preferences.budget {
        push(
            components,
            ScoreFactor::Budget,
            WITHIN_BUDGET,
            Some("Fits your budget.".to_string()),
        );
    } else {
        push(components, ScoreFactor::Budget, OVER_BUDGET, None);
    }
}

fn score_course(
    dish: &DishRecord,
    preferences: &PreferenceProfile,
    components: &mut Vec<ScoreComponent>,
) {
    match &preferences.course_preference {
        CoursePreference::FullMeal => {
            push(components, ScoreFactor::Course, FULL_MEAL_BONUS, None)
        }
        CoursePreference::Surprise => {}
        CoursePreference::Only(course) if *course == dish.course_type => push(
            components,
            ScoreFactor::Course,
            COURSE_MATCH,
            Some(format!("It is a {}.", dish.course_type)),
        ),
        CoursePreference::Only(_) | CoursePreference::Unrecognized(_) => {
            push(components, ScoreFactor::Course, COURSE_MISS, None)
        }
    }
}

fn score_spice(
    dish: &DishRecord,
    preferences: &PreferenceProfile,
    components: &mut Vec<ScoreComponent>,
) {
    let tolerance = preferences.spice_tolerance;
    match dish.enrichment.spice_level {
        Some(level) if level == tolerance => push(
            components,
            ScoreFactor::Spice,
            SPICE_MATCH,
            Some(format!("Perfect {} spice.", tolerance)),
        ),
        Some(SpiceLevel::High) if tolerance == SpiceLevel::Low => {
            push(components, ScoreFactor::Spice, SPICE_CLASH, None)
        }
        _ => {}
    }
}
