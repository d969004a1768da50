//! Property checks for the scorer and selector over generated menus.

use menu_advisor::workflows::menu::{CourseType, DishRecord, Enrichment, MenuPrice, SpiceLevel};
use menu_advisor::workflows::recommendation::{
    CoursePreference, DietaryRestriction, DishScorer, DishSelector, EatingStyle, HealthGoal,
    PreferenceProfile, RecommendationResult, ScoreFactor,
};
use proptest::prelude::*;

fn spice_level() -> impl Strategy<Value = Option<SpiceLevel>> {
    prop_oneof![
        Just(Some(SpiceLevel::Low)),
        Just(Some(SpiceLevel::Medium)),
        Just(Some(SpiceLevel::High)),
        Just(None),
    ]
}

fn course_type() -> impl Strategy<Value = CourseType> {
    prop_oneof![
        Just(CourseType::Starter),
        Just(CourseType::MainCourse),
        Just(CourseType::Dessert),
        Just(CourseType::Beverage),
    ]
}

prop_compose! {
    fn dish()(
        name in "[A-Z][a-z]{2,10}",
        price in 0.0f64..3000.0,
        cuisine in prop_oneof![Just("Indian"), Just("Italian"), Just("Thai"), Just("")],
        spice in spice_level(),
        is_veg in any::<bool>(),
        calories in proptest::option::of(50.0f64..1200.0),
        course in course_type(),
    ) -> DishRecord {
        DishRecord {
            price: MenuPrice::Amount(price.round()),
            course_type: course,
            enrichment: Enrichment {
                cuisine: cuisine.to_string(),
                spice_level: spice,
                is_veg,
                calories_approx: calories,
                ..Enrichment::default()
            },
            ..DishRecord::new(name)
        }
    }
}

prop_compose! {
    fn preferences()(
        dietary_type in prop_oneof![
            Just(DietaryRestriction::VegetarianOnly),
            Just(DietaryRestriction::NonVegetarianOnly),
            Just(DietaryRestriction::NoRestriction),
        ],
        budget in 0.0f64..3000.0,
        spice_tolerance in prop_oneof![
            Just(SpiceLevel::Low),
            Just(SpiceLevel::Medium),
            Just(SpiceLevel::High),
        ],
        course_preference in prop_oneof![
            Just(CoursePreference::FullMeal),
            Just(CoursePreference::Surprise),
            course_type().prop_map(CoursePreference::Only),
        ],
        preferred_cuisines in proptest::collection::vec(
            prop_oneof![Just("Indian".to_string()), Just("Italian".to_string())],
            0..2,
        ),
        eating_style in prop_oneof![
            Just(EatingStyle::Familiar),
            Just(EatingStyle::Experimental),
            Just(EatingStyle::Balanced),
        ],
        health_goal in prop_oneof![
            Just(HealthGoal::NoPreference),
            Just(HealthGoal::LowCalorie),
            Just(HealthGoal::HighProtein),
            Just(HealthGoal::LightAndEasy),
            Just(HealthGoal::LowSpice),
        ],
    ) -> PreferenceProfile {
        PreferenceProfile {
            dietary_type,
            budget: budget.round(),
            spice_tolerance,
            course_preference,
            multi_course_selection: Vec::new(),
            preferred_cuisines,
            eating_style,
            health_goal,
        }
    }
}

proptest! {
    #[test]
    fn vegetarian_only_never_selects_meat(
        menu in proptest::collection::vec(dish(), 1..12),
        mut profile in preferences(),
    ) {
        profile.dietary_type = DietaryRestriction::VegetarianOnly;
        let selector = DishSelector::default();

        if let Some(dish) = selector.recommend(&menu, &profile).dish() {
            prop_assert!(dish.enrichment.is_veg);
        }

        profile.multi_course_selection = CourseType::standard();
        let plan = selector.recommend_course_wise(&menu, &profile);
        for entry in plan.iter() {
            prop_assert!(entry.recommendation.dish.enrichment.is_veg);
            prop_assert_eq!(&entry.recommendation.dish.course_type, &entry.course);
        }
    }

    #[test]
    fn non_vegetarian_only_never_selects_vegetarian(
        menu in proptest::collection::vec(dish(), 1..12),
        mut profile in preferences(),
    ) {
        profile.dietary_type = DietaryRestriction::NonVegetarianOnly;

        if let Some(dish) = DishSelector::default().recommend(&menu, &profile).dish() {
            prop_assert!(!dish.enrichment.is_veg);
        }
    }

    #[test]
    fn selection_is_deterministic(
        menu in proptest::collection::vec(dish(), 0..12),
        profile in preferences(),
    ) {
        let selector = DishSelector::default();
        prop_assert_eq!(
            selector.recommend(&menu, &profile),
            selector.recommend(&menu, &profile)
        );
    }

    #[test]
    fn duplicated_dish_keeps_the_first_copy(
        original in dish(),
        profile in preferences(),
    ) {
        let mut twin = original.clone();
        twin.description = "second copy".to_string();
        let menu = vec![original, twin];

        if let RecommendationResult::Selected(pick) =
            DishSelector::default().recommend(&menu, &profile)
        {
            prop_assert_ne!(pick.dish.description.as_str(), "second copy");
        }
    }

    #[test]
    fn raising_the_budget_never_lowers_the_budget_score(
        candidate in dish(),
        profile in preferences(),
        extra in 0.0f64..2000.0,
    ) {
        let scorer = DishScorer::default();
        let mut richer = profile.clone();
        richer.budget += extra.round();

        let budget_score = |profile: &PreferenceProfile| {
            scorer.score(&candidate, profile).scored().map(|result| {
                result
                    .components
                    .iter()
                    .filter(|component| component.factor == ScoreFactor::Budget)
                    .map(|component| component.score)
                    .sum::<i16>()
            })
        };

        if let (Some(before), Some(after)) = (budget_score(&profile), budget_score(&richer)) {
            prop_assert!(after >= before);
        }
    }

    #[test]
    fn hot_dishes_cost_mild_diners_at_least_fifty_points(
        mut candidate in dish(),
        mut profile in preferences(),
    ) {
        candidate.enrichment.spice_level = Some(SpiceLevel::High);
        profile.dietary_type = DietaryRestriction::NoRestriction;
        let scorer = DishScorer::default();

        profile.spice_tolerance = SpiceLevel::Low;
        let mild = scorer.score(&candidate, &profile).into_scored().map(|r| r.score);
        profile.spice_tolerance = SpiceLevel::High;
        let hot = scorer.score(&candidate, &profile).into_scored().map(|r| r.score);

        let (Some(mild), Some(hot)) = (mild, hot) else {
            return Err(TestCaseError::fail("unrestricted diet never excludes"));
        };
        prop_assert!(hot - mild >= 50);
    }
}
