use axum::response::Response;
use serde_json::Value;

use crate::workflows::menu::{CourseType, DishRecord, Enrichment, MenuPrice, SpiceLevel};
use crate::workflows::recommendation::domain::{
    CoursePreference, DietaryRestriction, EatingStyle, HealthGoal, PreferenceProfile,
};
use crate::workflows::recommendation::scoring::{
    DishScorer, ScoreFactor, ScoreResult, ScoringConfig,
};
use crate::workflows::recommendation::{DishSelector, RecommendationService};

/// Non-vegetarian Indian dish at 300 with medium spice and no calorie estimate.
pub(super) fn dish(name: &str, course: CourseType) -> DishRecord {
    DishRecord {
        dish_name: name.to_string(),
        translated_name: None,
        language_original: None,
        price: MenuPrice::Amount(300.0),
        currency: "INR".to_string(),
        description: format!("House {name}"),
        course_type: course,
        enrichment: Enrichment {
            cuisine: "Indian".to_string(),
            region: None,
            spice_level: Some(SpiceLevel::Medium),
            is_veg: false,
            calories_approx: None,
            allergens: Vec::new(),
            ingredients: Vec::new(),
        },
        error: None,
    }
}

pub(super) fn veg_dish(name: &str, course: CourseType) -> DishRecord {
    let mut dish = dish(name, course);
    dish.enrichment.is_veg = true;
    dish
}

/// Preferences that leave only the budget and spice-match rules active.
pub(super) fn neutral_preferences() -> PreferenceProfile {
    PreferenceProfile {
        dietary_type: DietaryRestriction::NoRestriction,
        budget: 1000.0,
        spice_tolerance: SpiceLevel::Medium,
        course_preference: CoursePreference::Surprise,
        multi_course_selection: Vec::new(),
        preferred_cuisines: Vec::new(),
        eating_style: EatingStyle::Balanced,
        health_goal: HealthGoal::NoPreference,
    }
}

pub(super) fn sample_menu() -> Vec<DishRecord> {
    let mut soup = veg_dish("Tomato Shorba", CourseType::Starter);
    soup.enrichment.spice_level = Some(SpiceLevel::Low);
    soup.enrichment.calories_approx = Some(180.0);
    soup.enrichment.ingredients = vec!["Tomato".to_string(), "Cumin".to_string()];

    let mut tikka = dish("Chicken Tikka", CourseType::Starter);
    tikka.price = MenuPrice::Amount(420.0);
    tikka.enrichment.spice_level = Some(SpiceLevel::High);
    tikka.enrichment.ingredients = vec!["Chicken".to_string(), "Yogurt".to_string()];

    let mut paneer = veg_dish("Paneer Butter Masala", CourseType::MainCourse);
    paneer.translated_name = Some("Cottage Cheese in Butter Gravy".to_string());
    paneer.price = MenuPrice::Amount(500.0);
    paneer.enrichment.region = Some("North Indian".to_string());
    paneer.enrichment.calories_approx = Some(520.0);
    paneer.enrichment.ingredients = vec![
        "Paneer".to_string(),
        "Tomato".to_string(),
        "Butter".to_string(),
        "Cream".to_string(),
    ];

    let mut risotto = veg_dish("Risotto ai Funghi", CourseType::MainCourse);
    risotto.price = MenuPrice::Amount(1400.0);
    risotto.enrichment.cuisine = "Italian".to_string();
    risotto.enrichment.spice_level = Some(SpiceLevel::Low);

    let mut kulfi = veg_dish("Kulfi", CourseType::Dessert);
    kulfi.price = MenuPrice::Text("150".to_string());
    kulfi.enrichment.spice_level = Some(SpiceLevel::Low);

    vec![soup, tikka, paneer, risotto, kulfi]
}

pub(super) fn scorer() -> DishScorer {
    DishScorer::new(ScoringConfig::default())
}

pub(super) fn selector() -> DishSelector {
    DishSelector::new(scorer())
}

pub(super) fn service() -> RecommendationService {
    RecommendationService::without_images(selector())
}

pub(super) fn scored(dish: &DishRecord, preferences: &PreferenceProfile) -> ScoreResult {
    scorer()
        .score(dish, preferences)
        .into_scored()
        .expect("dish is not excluded")
}

pub(super) fn factor_total(result: &ScoreResult, factor: ScoreFactor) -> i16 {
    result
        .components
        .iter()
        .filter(|component| component.factor == factor)
        .map(|component| component.score)
        .sum()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
