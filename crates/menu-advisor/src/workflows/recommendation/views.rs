use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::workflows::menu::{DishImageCatalog, DishRecord, MenuPrice};

/// Dish fields a presentation layer needs to render a pick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishView {
    pub dish_name: String,
    pub display_name: String,
    pub language_original: String,
    pub course_type: String,
    pub price: MenuPrice,
    pub currency: String,
    pub description: String,
    pub cuisine: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spice_level: Option<&'static str>,
    pub is_veg: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_approx: Option<f64>,
    pub allergens: Vec<String>,
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

impl DishView {
    pub fn from_dish(dish: &DishRecord, images: Option<&DishImageCatalog>) -> Self {
        let image_path = images
            .and_then(|catalog| catalog.image_for(&dish.dish_name))
            .map(|path| path.display().to_string());

        Self {
            dish_name: dish.dish_name.clone(),
            display_name: dish.display_name().to_string(),
            language_original: dish.language().to_string(),
            course_type: dish.course_type.label().to_string(),
            price: dish.price.clone(),
            currency: dish.currency.clone(),
            description: dish.description.clone(),
            cuisine: dish.enrichment.cuisine.clone(),
            region: dish.enrichment.region.clone(),
            spice_level: dish.enrichment.spice_level.map(|level| level.label()),
            is_veg: dish.enrichment.is_veg,
            calories_approx: dish.enrichment.calories_approx,
            allergens: dish.enrichment.allergens.clone(),
            ingredients: dish.enrichment.ingredients.clone(),
            image_path,
        }
    }
}

/// One recommended dish, optionally tied to the course it was picked for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishPick {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    pub dish: DishView,
    pub score: i16,
    pub reasons: Vec<String>,
}

/// How the report's picks were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationMode {
    CoursePlan,
    Single,
    NoMatch,
    UpstreamError,
}

/// Response payload for a recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationReport {
    pub generated_at: DateTime<Utc>,
    pub mode: RecommendationMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub picks: Vec<DishPick>,
}

/// Per-dish audit entry used by the scoring endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishScoreView {
    pub dish_name: String,
    pub course_type: String,
    #[serde(flatten)]
    pub outcome: super::scoring::ScoreOutcome,
}
