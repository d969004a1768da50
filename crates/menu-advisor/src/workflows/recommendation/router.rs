use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::PreferenceProfile;
use super::service::RecommendationService;
use super::RecommendationError;
use crate::workflows::menu::DishRecord;

/// Body accepted by every recommendation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub menu: Vec<DishRecord>,
    pub preferences: PreferenceProfile,
}

/// Router builder exposing the recommendation and scoring endpoints.
pub fn recommendation_router(service: Arc<RecommendationService>) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler))
        .route("/api/v1/recommendations/single", post(single_handler))
        .route("/api/v1/recommendations/courses", post(courses_handler))
        .route("/api/v1/dishes/score", post(score_handler))
        .with_state(service)
}

pub(crate) async fn recommend_handler(
    State(service): State<Arc<RecommendationService>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response {
    respond(service.recommend(&request.menu, &request.preferences))
}

pub(crate) async fn single_handler(
    State(service): State<Arc<RecommendationService>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response {
    respond(service.recommend_single(&request.menu, &request.preferences))
}

pub(crate) async fn courses_handler(
    State(service): State<Arc<RecommendationService>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response {
    respond(service.recommend_courses(&request.menu, &request.preferences))
}

pub(crate) async fn score_handler(
    State(service): State<Arc<RecommendationService>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response {
    respond(service.score_menu(&request.menu, &request.preferences))
}

fn respond<T: Serialize>(result: Result<T, RecommendationError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, axum::Json(body)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
