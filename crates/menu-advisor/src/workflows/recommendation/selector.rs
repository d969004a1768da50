use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::PreferenceProfile;
use super::narrative;
use super::scoring::{DishScorer, ScoreOutcome, ScoreResult};
use crate::workflows::menu::{CourseType, DishRecord};

/// Message returned when the digitizer could not produce a usable menu.
pub const UPSTREAM_ERROR_MESSAGE: &str = "Error in menu data processing.";

/// Winning dish with its score and explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub dish: DishRecord,
    pub score: i16,
    pub reasons: Vec<String>,
}

/// Outcome of single-best selection.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationResult {
    Selected(Recommendation),
    /// Every candidate was excluded.
    NoMatch,
    /// The menu was empty or led by an upstream failure marker.
    UpstreamDataError { message: String },
}

impl RecommendationResult {
    pub fn dish(&self) -> Option<&DishRecord> {
        match self {
            RecommendationResult::Selected(recommendation) => Some(&recommendation.dish),
            _ => None,
        }
    }

    /// Reasons to show the diner: the explanation, the fixed upstream message, or nothing.
    pub fn reasons(&self) -> Vec<String> {
        match self {
            RecommendationResult::Selected(recommendation) => recommendation.reasons.clone(),
            RecommendationResult::NoMatch => Vec::new(),
            RecommendationResult::UpstreamDataError { message } => vec![message.clone()],
        }
    }

    pub fn into_recommendation(self) -> Option<Recommendation> {
        match self {
            RecommendationResult::Selected(recommendation) => Some(recommendation),
            _ => None,
        }
    }
}

/// Best dish for one requested course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecommendation {
    pub course: CourseType,
    #[serde(flatten)]
    pub recommendation: Recommendation,
}

/// Course-wise picks in the order the diner listed the courses.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CoursePlan {
    entries: Vec<CourseRecommendation>,
}

impl CoursePlan {
    pub fn get(&self, course: &CourseType) -> Option<&Recommendation> {
        self.entries
            .iter()
            .find(|entry| &entry.course == course)
            .map(|entry| &entry.recommendation)
    }

    pub fn contains(&self, course: &CourseType) -> bool {
        self.get(course).is_some()
    }

    pub fn courses(&self) -> impl Iterator<Item = &CourseType> {
        self.entries.iter().map(|entry| &entry.course)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CourseRecommendation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<CourseRecommendation> {
        self.entries
    }
}

/// Drives the scorer over candidate dishes.
#[derive(Debug, Clone, Default)]
pub struct DishSelector {
    scorer: DishScorer,
}

impl DishSelector {
    pub fn new(scorer: DishScorer) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &DishScorer {
        &self.scorer
    }

    /// Pick the single best dish. Ties go to the dish listed first.
    pub fn recommend(
        &self,
        dishes: &[DishRecord],
        preferences: &PreferenceProfile,
    ) -> RecommendationResult {
        match dishes.first() {
            None => {
                warn!("menu is empty");
                return upstream_error();
            }
            Some(first) if first.is_upstream_failure() => {
                warn!(
                    error = first.error.as_deref().unwrap_or_default(),
                    "menu digitizing failed upstream"
                );
                return upstream_error();
            }
            Some(_) => {}
        }

        match self.select(dishes, preferences) {
            Some((dish, result)) => {
                RecommendationResult::Selected(self.finish(dish, result, preferences))
            }
            None => {
                info!(candidates = dishes.len(), "no dish survived the filters");
                RecommendationResult::NoMatch
            }
        }
    }

    /// Pick the best dish for each course in `multi_course_selection`, skipping courses with
    /// no candidates.
    pub fn recommend_course_wise(
        &self,
        dishes: &[DishRecord],
        preferences: &PreferenceProfile,
    ) -> CoursePlan {
        let mut plan = CoursePlan::default();

        for course in &preferences.multi_course_selection {
            if plan.courses().any(|planned| planned == course) {
                continue;
            }

            let candidates: Vec<&DishRecord> = dishes
                .iter()
                .filter(|dish| !dish.is_upstream_failure() && &dish.course_type == course)
                .collect();

            if candidates.is_empty() {
                debug!(course = %course, "no dishes on the menu for course");
                continue;
            }

            if let Some((dish, result)) = self.select(candidates, preferences) {
                plan.entries.push(CourseRecommendation {
                    course: course.clone(),
                    recommendation: self.finish(dish, result, preferences),
                });
            }
        }

        plan
    }

    fn select<'a, I>(
        &self,
        dishes: I,
        preferences: &PreferenceProfile,
    ) -> Option<(&'a DishRecord, ScoreResult)>
    where
        I: IntoIterator<Item = &'a DishRecord>,
    {
        let mut best: Option<(&'a DishRecord, ScoreResult)> = None;

        for dish in dishes {
            if dish.is_upstream_failure() {
                continue;
            }

            let result = match self.scorer.score(dish, preferences) {
                ScoreOutcome::Excluded { reason } => {
                    debug!(dish = %dish.dish_name, reason = reason.summary(), "dish excluded");
                    continue;
                }
                ScoreOutcome::Scored(result) => result,
            };

            debug!(dish = %dish.dish_name, score = result.score, "dish scored");

            let improves = best
                .as_ref()
                .map_or(true, |(_, current)| result.score > current.score);
            if improves {
                best = Some((dish, result));
            }
        }

        best
    }

    fn finish(
        &self,
        dish: &DishRecord,
        result: ScoreResult,
        preferences: &PreferenceProfile,
    ) -> Recommendation {
        info!(dish = %dish.dish_name, course = %dish.course_type, score = result.score, "dish selected");
        Recommendation {
            dish: dish.with_defaults(),
            score: result.score,
            reasons: narrative::explain(dish, preferences, result.reasons),
        }
    }
}

fn upstream_error() -> RecommendationResult {
    RecommendationResult::UpstreamDataError {
        message: UPSTREAM_ERROR_MESSAGE.to_string(),
    }
}
