use crate::infra::{parse_course, parse_spice};
use clap::Args;
use menu_advisor::config::AppConfig;
use menu_advisor::error::AppError;
use menu_advisor::telemetry::{self, LogSink};
use menu_advisor::workflows::menu::{
    CourseType, DishImageCatalog, DishRecord, MenuImporter, SpiceLevel,
};
use menu_advisor::workflows::recommendation::{
    CoursePreference, DietaryRestriction, DishSelector, EatingStyle, HealthGoal,
    PreferenceProfile, RecommendationReport, RecommendationService, ScoreOutcome,
};
use std::path::PathBuf;
use tracing::info;

const SAMPLE_MENU: &str = r#"[
    {
        "dish_name": "Tomato Shorba",
        "translated_name": "Spiced Tomato Soup",
        "language_original": "Hindi",
        "price": 160,
        "currency": "INR",
        "description": "Thin tomato broth tempered with cumin",
        "course_type": "Starter",
        "enrichment": {
            "cuisine": "North Indian",
            "spice_level": "Low",
            "is_veg": true,
            "calories_approx": 140,
            "ingredients": ["Tomato", "Cumin", "Coriander"]
        }
    },
    {
        "dish_name": "Chicken Malai Tikka",
        "price": 420,
        "currency": "INR",
        "description": "Cream-marinated chicken from the tandoor",
        "course_type": "Starter",
        "enrichment": {
            "cuisine": "Mughlai Indian",
            "spice_level": "Medium",
            "is_veg": false,
            "calories_approx": 380,
            "ingredients": ["Chicken", "Cream", "Cashew"]
        }
    },
    {
        "dish_name": "Paneer Lababdar",
        "price": 360,
        "currency": "INR",
        "description": "Cottage cheese in an onion tomato gravy",
        "course_type": "Main Course",
        "enrichment": {
            "cuisine": "Punjabi Indian",
            "region": "Punjab",
            "spice_level": "Medium",
            "is_veg": true,
            "calories_approx": 540,
            "ingredients": ["Paneer", "Tomato", "Onion", "Cream"]
        }
    },
    {
        "dish_name": "Laal Maas",
        "price": 520,
        "currency": "INR",
        "description": "Fiery Rajasthani mutton curry",
        "course_type": "Main Course",
        "enrichment": {
            "cuisine": "Rajasthani Indian",
            "region": "Rajasthan",
            "spice_level": "High",
            "is_veg": false,
            "calories_approx": 690,
            "ingredients": ["Mutton", "Mathania Chilli", "Yogurt"]
        }
    },
    {
        "dish_name": "Pad Thai",
        "price": 450,
        "currency": "INR",
        "description": "Rice noodles with tofu and peanuts",
        "course_type": "Main Course",
        "enrichment": {
            "cuisine": "Thai",
            "spice_level": "Medium",
            "is_veg": true,
            "calories_approx": 610,
            "ingredients": ["Rice Noodles", "Tofu", "Peanut", "Tamarind"]
        }
    },
    {
        "dish_name": "Gulab Jamun",
        "price": "120",
        "currency": "INR",
        "description": "Milk dumplings in rose syrup",
        "course_type": "Dessert",
        "enrichment": {
            "cuisine": "Indian",
            "spice_level": "Low",
            "is_veg": true,
            "calories_approx": 300,
            "ingredients": ["Khoa", "Sugar", "Rose Water"]
        }
    },
    {
        "dish_name": "Masala Chaas",
        "price": 90,
        "currency": "INR",
        "description": "Spiced buttermilk",
        "course_type": "Beverage",
        "enrichment": {
            "cuisine": "Gujarati Indian",
            "spice_level": "Low",
            "is_veg": true,
            "calories_approx": 70,
            "ingredients": ["Yogurt", "Cumin", "Mint"]
        }
    }
]"#;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Digitizer JSON export; repeat for multi-page menus
    #[arg(long, required = true)]
    pub(crate) menu: Vec<PathBuf>,
    /// Dietary restriction label (e.g. "Vegetarian Only")
    #[arg(long, default_value = "Mix (Any)")]
    pub(crate) diet: String,
    /// Maximum price per dish
    #[arg(long, default_value_t = 1000.0)]
    pub(crate) budget: f64,
    /// Spice tolerance: Low, Medium, or High
    #[arg(long, default_value = "Medium", value_parser = parse_spice)]
    pub(crate) spice: SpiceLevel,
    /// Course preference label (e.g. "Full Meal", "Dessert Only")
    #[arg(long, default_value = "Surprise Me (Any)")]
    pub(crate) course: String,
    /// Comma-separated courses to plan; defaults follow the course preference
    #[arg(long, value_delimiter = ',', value_parser = parse_course)]
    pub(crate) courses: Vec<CourseType>,
    /// Preferred cuisine; repeat for several
    #[arg(long)]
    pub(crate) cuisine: Vec<String>,
    /// Eating style: Familiar, Experimental, or Balanced
    #[arg(long, default_value = "Balanced")]
    pub(crate) style: String,
    /// Health goal label (e.g. "Low Calorie", "High Protein")
    #[arg(long, default_value = "No Preference")]
    pub(crate) health: String,
    /// Dish photo directory (defaults to MENU_IMAGE_DIR)
    #[arg(long)]
    pub(crate) image_dir: Option<PathBuf>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl RecommendArgs {
    fn profile(&self) -> PreferenceProfile {
        PreferenceProfile {
            dietary_type: DietaryRestriction::from_label(&self.diet),
            budget: self.budget,
            spice_tolerance: self.spice,
            course_preference: CoursePreference::from_label(&self.course),
            multi_course_selection: self.courses.clone(),
            preferred_cuisines: self.cuisine.clone(),
            eating_style: EatingStyle::from_label(&self.style),
            health_goal: HealthGoal::from_label(&self.health),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print each report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// Skip the per-dish score breakdown
    #[arg(long)]
    pub(crate) skip_scores: bool,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogSink::Cli)?;

    let menu = MenuImporter::from_paths(&args.menu)?;
    info!(pages = args.menu.len(), dishes = menu.len(), "menu loaded");

    let image_dir = args
        .image_dir
        .clone()
        .unwrap_or_else(|| config.catalog.image_dir.clone());
    let service =
        RecommendationService::new(DishSelector::default(), DishImageCatalog::new(image_dir));
    let report = service.recommend(&menu, &args.profile())?;

    if args.json {
        print_json(&report)
    } else {
        render_report(&report);
        Ok(())
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { json, skip_scores } = args;
    let menu = sample_menu()?;
    let service = RecommendationService::without_images(DishSelector::default());

    println!("Menu advisor demo ({} dishes)", menu.len());
    for (title, profile) in demo_profiles() {
        println!("\n{title}");
        let report = service.recommend(&menu, &profile)?;
        if json {
            print_json(&report)?;
        } else {
            render_report(&report);
        }

        if skip_scores {
            continue;
        }

        println!("  Score breakdown:");
        for entry in service.score_menu(&menu, &profile)? {
            match &entry.outcome {
                ScoreOutcome::Excluded { reason } => println!(
                    "    - {} [{}]: {}",
                    entry.dish_name,
                    entry.course_type,
                    reason.summary()
                ),
                ScoreOutcome::Scored(result) => println!(
                    "    - {} [{}]: {}",
                    entry.dish_name, entry.course_type, result.score
                ),
            }
        }
    }

    Ok(())
}

fn sample_menu() -> Result<Vec<DishRecord>, AppError> {
    Ok(MenuImporter::from_json_str(SAMPLE_MENU)?)
}

fn demo_profiles() -> Vec<(&'static str, PreferenceProfile)> {
    vec![
        (
            "Vegetarian diner on a light full meal",
            PreferenceProfile {
                dietary_type: DietaryRestriction::VegetarianOnly,
                budget: 400.0,
                spice_tolerance: SpiceLevel::Low,
                course_preference: CoursePreference::FullMeal,
                multi_course_selection: Vec::new(),
                preferred_cuisines: vec!["Indian".to_string()],
                eating_style: EatingStyle::Familiar,
                health_goal: HealthGoal::LowCalorie,
            },
        ),
        (
            "Adventurous meat eater after a main course",
            PreferenceProfile {
                dietary_type: DietaryRestriction::NonVegetarianOnly,
                budget: 600.0,
                spice_tolerance: SpiceLevel::High,
                course_preference: CoursePreference::Only(CourseType::MainCourse),
                multi_course_selection: Vec::new(),
                preferred_cuisines: vec!["Thai".to_string()],
                eating_style: EatingStyle::Experimental,
                health_goal: HealthGoal::HighProtein,
            },
        ),
        (
            "Diner asking for a course the menu cannot name",
            PreferenceProfile {
                course_preference: CoursePreference::from_label("Brunch Platter"),
                ..PreferenceProfile::default()
            },
        ),
    ]
}

fn print_json(report: &RecommendationReport) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(report).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

fn render_report(report: &RecommendationReport) {
    if let Some(message) = &report.message {
        println!("  {message}");
    }

    for pick in &report.picks {
        let heading = match &pick.course {
            Some(course) => format!("{course}: {}", pick.dish.display_name),
            None => pick.dish.display_name.clone(),
        };
        println!(
            "- {heading} | {} {} | score {}",
            pick.dish.price, pick.dish.currency, pick.score
        );
        if pick.dish.display_name != pick.dish.dish_name {
            println!(
                "  Original name: {} ({})",
                pick.dish.dish_name, pick.dish.language_original
            );
        }
        for reason in &pick.reasons {
            println!("  * {reason}");
        }
        if let Some(path) = &pick.dish.image_path {
            println!("  Photo: {path}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_advisor::workflows::recommendation::RecommendationMode;

    #[test]
    fn sample_menu_decodes_every_dish() {
        let menu = sample_menu().expect("sample menu parses");
        assert_eq!(menu.len(), 7);
        assert_eq!(menu[5].price_amount(), 120.0);
    }

    #[test]
    fn demo_profiles_cover_plan_and_fallback() {
        let menu = sample_menu().expect("sample menu parses");
        let service = RecommendationService::without_images(DishSelector::default());

        let modes: Vec<_> = demo_profiles()
            .into_iter()
            .map(|(_, profile)| service.recommend(&menu, &profile).expect("valid").mode)
            .collect();

        assert_eq!(
            modes,
            vec![
                RecommendationMode::CoursePlan,
                RecommendationMode::CoursePlan,
                RecommendationMode::Single,
            ]
        );
    }

    #[test]
    fn vegetarian_demo_plans_every_course() {
        let menu = sample_menu().expect("sample menu parses");
        let service = RecommendationService::without_images(DishSelector::default());
        let (_, profile) = demo_profiles().remove(0);

        let report = service.recommend(&menu, &profile).expect("valid");
        let picks: Vec<_> = report
            .picks
            .iter()
            .map(|pick| pick.dish.dish_name.as_str())
            .collect();

        assert_eq!(
            picks,
            vec!["Tomato Shorba", "Paneer Lababdar", "Gulab Jamun", "Masala Chaas"]
        );
    }

    #[test]
    fn cli_flags_decode_into_a_profile() {
        let args = RecommendArgs {
            menu: vec![PathBuf::from("menu.json")],
            diet: "Non-Vegetarian Only 🍗".to_string(),
            budget: 750.0,
            spice: SpiceLevel::High,
            course: "Dessert Only".to_string(),
            courses: Vec::new(),
            cuisine: vec!["Italian".to_string()],
            style: "Experimental 🌍".to_string(),
            health: "Light & Easy".to_string(),
            image_dir: None,
            json: false,
        };

        let profile = args.profile();

        assert_eq!(profile.dietary_type, DietaryRestriction::NonVegetarianOnly);
        assert_eq!(
            profile.course_preference,
            CoursePreference::Only(CourseType::Dessert)
        );
        assert_eq!(profile.eating_style, EatingStyle::Experimental);
        assert_eq!(profile.health_goal, HealthGoal::LightAndEasy);
    }
}
