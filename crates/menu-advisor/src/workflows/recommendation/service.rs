use chrono::Utc;

use super::domain::PreferenceProfile;
use super::selector::{CoursePlan, DishSelector, Recommendation, RecommendationResult};
use super::views::{DishPick, DishScoreView, DishView, RecommendationMode, RecommendationReport};
use super::RecommendationError;
use crate::workflows::menu::{DishImageCatalog, DishRecord};

const NO_MATCH_MESSAGE: &str =
    "No dish matched all filters perfectly. Try adjusting budget or course selection.";

/// Service composing the selector with the dish photo catalog.
pub struct RecommendationService {
    selector: DishSelector,
    images: Option<DishImageCatalog>,
}

impl RecommendationService {
    pub fn new(selector: DishSelector, images: DishImageCatalog) -> Self {
        Self {
            selector,
            images: Some(images),
        }
    }

    pub fn without_images(selector: DishSelector) -> Self {
        Self {
            selector,
            images: None,
        }
    }

    pub fn selector(&self) -> &DishSelector {
        &self.selector
    }

    /// Plan every requested course, falling back to a single best dish when no course
    /// produced a pick.
    pub fn recommend(
        &self,
        menu: &[DishRecord],
        preferences: &PreferenceProfile,
    ) -> Result<RecommendationReport, RecommendationError> {
        preferences.validate()?;
        let preferences = preferences.with_course_defaults();

        let plan = self.selector.recommend_course_wise(menu, &preferences);
        if !plan.is_empty() {
            return Ok(self.course_report(plan));
        }

        Ok(self.single_report(self.selector.recommend(menu, &preferences)))
    }

    pub fn recommend_single(
        &self,
        menu: &[DishRecord],
        preferences: &PreferenceProfile,
    ) -> Result<RecommendationReport, RecommendationError> {
        preferences.validate()?;
        Ok(self.single_report(self.selector.recommend(menu, preferences)))
    }

    /// Course-wise picks only; courses come from `multi_course_selection` as given.
    pub fn recommend_courses(
        &self,
        menu: &[DishRecord],
        preferences: &PreferenceProfile,
    ) -> Result<RecommendationReport, RecommendationError> {
        preferences.validate()?;
        let plan = self.selector.recommend_course_wise(menu, preferences);
        if plan.is_empty() {
            return Ok(report(
                RecommendationMode::NoMatch,
                Some(NO_MATCH_MESSAGE.to_string()),
                Vec::new(),
            ));
        }
        Ok(self.course_report(plan))
    }

    /// Score every dish in menu order, including excluded ones.
    pub fn score_menu(
        &self,
        menu: &[DishRecord],
        preferences: &PreferenceProfile,
    ) -> Result<Vec<DishScoreView>, RecommendationError> {
        preferences.validate()?;
        let scorer = self.selector.scorer();
        Ok(menu
            .iter()
            .filter(|dish| !dish.is_upstream_failure())
            .map(|dish| DishScoreView {
                dish_name: dish.dish_name.clone(),
                course_type: dish.course_type.label().to_string(),
                outcome: scorer.score(dish, preferences),
            })
            .collect())
    }

    fn course_report(&self, plan: CoursePlan) -> RecommendationReport {
        let picks = plan
            .into_entries()
            .into_iter()
            .map(|entry| self.pick(Some(entry.course.label().to_string()), entry.recommendation))
            .collect();
        report(RecommendationMode::CoursePlan, None, picks)
    }

    fn single_report(&self, result: RecommendationResult) -> RecommendationReport {
        match result {
            RecommendationResult::Selected(recommendation) => report(
                RecommendationMode::Single,
                None,
                vec![self.pick(None, recommendation)],
            ),
            RecommendationResult::NoMatch => report(
                RecommendationMode::NoMatch,
                Some(NO_MATCH_MESSAGE.to_string()),
                Vec::new(),
            ),
            RecommendationResult::UpstreamDataError { message } => {
                report(RecommendationMode::UpstreamError, Some(message), Vec::new())
            }
        }
    }

    fn pick(&self, course: Option<String>, recommendation: Recommendation) -> DishPick {
        DishPick {
            course,
            dish: DishView::from_dish(&recommendation.dish, self.images.as_ref()),
            score: recommendation.score,
            reasons: recommendation.reasons,
        }
    }
}

fn report(
    mode: RecommendationMode,
    message: Option<String>,
    picks: Vec<DishPick>,
) -> RecommendationReport {
    RecommendationReport {
        generated_at: Utc::now(),
        mode,
        message,
        picks,
    }
}
