//! Diner preference profile.
//!
//! The preference form upstream offers decorated labels ("Vegetarian Only 🥦",
//! "Low Calorie 🥗"). Each categorical preference is decoded into an explicit enum by
//! case-insensitive keyword containment on the trimmed label, so any label that embeds the
//! canonical keyword decodes the same way. Eating style is the one exception: it is matched on
//! the label prefix.

use serde::{Deserialize, Serialize};

use super::RecommendationError;
use crate::workflows::menu::{CourseType, SpiceLevel};

/// Hard dietary constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DietaryRestriction {
    VegetarianOnly,
    NonVegetarianOnly,
    #[default]
    NoRestriction,
}

impl DietaryRestriction {
    pub fn from_label(raw: &str) -> Self {
        let label = raw.trim().to_lowercase();
        // "non-vegetarian only" embeds "vegetarian only", so it has to be checked first.
        if label.contains("non-vegetarian only") {
            Self::NonVegetarianOnly
        } else if label.contains("vegetarian only") {
            Self::VegetarianOnly
        } else {
            Self::NoRestriction
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VegetarianOnly => "Vegetarian Only",
            Self::NonVegetarianOnly => "Non-Vegetarian Only",
            Self::NoRestriction => "Mix (Any)",
        }
    }
}

/// Which course the diner is mainly after.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CoursePreference {
    FullMeal,
    /// Only Starter, Main Course, or Dessert are produced by label decoding.
    Only(CourseType),
    #[default]
    Surprise,
    /// A specific request none of the dishes can satisfy; every dish is marked down.
    Unrecognized(String),
}

impl CoursePreference {
    pub fn from_label(raw: &str) -> Self {
        let trimmed = raw.trim();
        let label = trimmed.to_lowercase();
        if label.contains("full meal") {
            Self::FullMeal
        } else if label.contains("main course") {
            Self::Only(CourseType::MainCourse)
        } else if label.contains("starter") {
            Self::Only(CourseType::Starter)
        } else if label.contains("dessert") {
            Self::Only(CourseType::Dessert)
        } else if label.contains("surprise") || label.is_empty() {
            Self::Surprise
        } else {
            Self::Unrecognized(trimmed.to_string())
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::FullMeal => "Full Meal (Starter + Main + Dessert)".to_string(),
            Self::Only(course) => format!("{} Only", course.label()),
            Self::Surprise => "Surprise Me (Any)".to_string(),
            Self::Unrecognized(raw) => raw.clone(),
        }
    }

    /// Courses to plan when the diner did not pick any explicitly.
    pub fn default_courses(&self) -> Vec<CourseType> {
        match self {
            Self::FullMeal | Self::Surprise => CourseType::standard(),
            Self::Only(course) => vec![course.clone()],
            Self::Unrecognized(_) => Vec::new(),
        }
    }
}

/// How adventurous the diner wants to be relative to their preferred cuisines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EatingStyle {
    Familiar,
    Experimental,
    #[default]
    Balanced,
}

impl EatingStyle {
    pub fn from_label(raw: &str) -> Self {
        let label = raw.trim().to_lowercase();
        if label.starts_with("familiar") {
            Self::Familiar
        } else if label.starts_with("experimental") {
            Self::Experimental
        } else {
            Self::Balanced
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Familiar => "Familiar",
            Self::Experimental => "Experimental",
            Self::Balanced => "Balanced",
        }
    }
}

/// Optional health focus; at most one applies per request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HealthGoal {
    #[default]
    NoPreference,
    LowCalorie,
    HighProtein,
    LightAndEasy,
    LowSpice,
}

impl HealthGoal {
    pub fn from_label(raw: &str) -> Self {
        let label = raw.trim().to_lowercase();
        if label.contains("low calorie") {
            Self::LowCalorie
        } else if label.contains("high protein") {
            Self::HighProtein
        } else if label.contains("light") {
            Self::LightAndEasy
        } else if label.contains("low spice") {
            Self::LowSpice
        } else {
            Self::NoPreference
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NoPreference => "No Preference",
            Self::LowCalorie => "Low Calorie",
            Self::HighProtein => "High Protein",
            Self::LightAndEasy => "Light & Easy to Digest",
            Self::LowSpice => "Low Spice",
        }
    }
}

macro_rules! label_conversions {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<String> for $ty {
                fn from(value: String) -> Self {
                    Self::from_label(&value)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.label().to_string()
                }
            }
        )+
    };
}

label_conversions!(DietaryRestriction, CoursePreference, EatingStyle, HealthGoal);

/// The diner's constraints and soft preferences for one recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceProfile {
    #[serde(default)]
    pub dietary_type: DietaryRestriction,
    pub budget: f64,
    #[serde(default)]
    pub spice_tolerance: SpiceLevel,
    #[serde(default)]
    pub course_preference: CoursePreference,
    #[serde(default)]
    pub multi_course_selection: Vec<CourseType>,
    #[serde(default)]
    pub preferred_cuisines: Vec<String>,
    #[serde(default)]
    pub eating_style: EatingStyle,
    #[serde(default)]
    pub health_goal: HealthGoal,
}

impl Default for PreferenceProfile {
    fn default() -> Self {
        Self {
            dietary_type: DietaryRestriction::default(),
            budget: 1000.0,
            spice_tolerance: SpiceLevel::default(),
            course_preference: CoursePreference::default(),
            multi_course_selection: Vec::new(),
            preferred_cuisines: Vec::new(),
            eating_style: EatingStyle::default(),
            health_goal: HealthGoal::default(),
        }
    }
}

impl PreferenceProfile {
    pub fn validate(&self) -> Result<(), RecommendationError> {
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(RecommendationError::InvalidBudget(self.budget));
        }
        Ok(())
    }

    pub fn has_preferred_cuisines(&self) -> bool {
        self.preferred_cuisines
            .iter()
            .any(|cuisine| !cuisine.trim().is_empty())
    }

    /// Substring match of any preferred cuisine within the dish cuisine, ignoring case.
    pub fn prefers_cuisine(&self, dish_cuisine: &str) -> bool {
        let dish_cuisine = dish_cuisine.to_lowercase();
        self.preferred_cuisines
            .iter()
            .map(|cuisine| cuisine.trim().to_lowercase())
            .filter(|cuisine| !cuisine.is_empty())
            .any(|cuisine| dish_cuisine.contains(&cuisine))
    }

    /// Copy whose course selection is filled from the course preference when left empty.
    pub fn with_course_defaults(&self) -> Self {
        let mut profile = self.clone();
        if profile.multi_course_selection.is_empty() {
            profile.multi_course_selection = profile.course_preference.default_courses();
        }
        profile
    }
}
