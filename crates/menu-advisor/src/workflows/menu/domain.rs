use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::serde_helpers;

/// Language recorded when the enrichment step did not detect one.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Menu category of a dish.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CourseType {
    Starter,
    #[default]
    MainCourse,
    Dessert,
    Beverage,
    Other(String),
}

impl CourseType {
    /// The four courses a diner can plan for, in menu order.
    pub fn standard() -> Vec<CourseType> {
        vec![
            CourseType::Starter,
            CourseType::MainCourse,
            CourseType::Dessert,
            CourseType::Beverage,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            CourseType::Starter => "Starter",
            CourseType::MainCourse => "Main Course",
            CourseType::Dessert => "Dessert",
            CourseType::Beverage => "Beverage",
            CourseType::Other(label) => label,
        }
    }

    pub fn from_label(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "starter" => CourseType::Starter,
            "main course" => CourseType::MainCourse,
            "dessert" => CourseType::Dessert,
            "beverage" => CourseType::Beverage,
            _ => CourseType::Other(trimmed.to_string()),
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for CourseType {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<CourseType> for String {
    fn from(value: CourseType) -> Self {
        value.label().to_string()
    }
}

/// Spice intensity shared by dish enrichment and diner tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SpiceLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl SpiceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            SpiceLevel::Low => "Low",
            SpiceLevel::Medium => "Medium",
            SpiceLevel::High => "High",
        }
    }
}

impl fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a spice label is not one of Low, Medium, or High.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized spice level '{0}', expected Low, Medium, or High")]
pub struct SpiceLevelError(pub String);

impl FromStr for SpiceLevel {
    type Err = SpiceLevelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(SpiceLevel::Low),
            "medium" => Ok(SpiceLevel::Medium),
            "high" => Ok(SpiceLevel::High),
            _ => Err(SpiceLevelError(raw.to_string())),
        }
    }
}

impl TryFrom<String> for SpiceLevel {
    type Error = SpiceLevelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SpiceLevel> for String {
    fn from(value: SpiceLevel) -> Self {
        value.label().to_string()
    }
}

/// Price as it appeared on the menu.
///
/// Non-numeric and missing prices count as free when compared against a budget.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MenuPrice {
    #[default]
    Missing,
    Amount(f64),
    Text(String),
}

impl MenuPrice {
    pub fn amount(&self) -> f64 {
        match self {
            MenuPrice::Amount(value) if value.is_finite() => *value,
            MenuPrice::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .unwrap_or(0.0),
            _ => 0.0,
        }
    }
}

impl fmt::Display for MenuPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuPrice::Missing => f.write_str("N/A"),
            MenuPrice::Amount(value) => write!(f, "{value}"),
            MenuPrice::Text(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for MenuPrice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MenuPrice::Missing => serializer.serialize_none(),
            MenuPrice::Amount(value) => serializer.serialize_f64(*value),
            MenuPrice::Text(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for MenuPrice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(number) => number
                .as_f64()
                .map(MenuPrice::Amount)
                .unwrap_or(MenuPrice::Missing),
            Value::String(raw) => MenuPrice::Text(raw),
            _ => MenuPrice::Missing,
        })
    }
}

/// Descriptive metadata computed upstream for a dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrichment {
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub cuisine: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub region: Option<String>,
    /// `None` when upstream sent a label outside Low/Medium/High.
    #[serde(
        default = "default_spice_level",
        deserialize_with = "serde_helpers::spice_level"
    )]
    pub spice_level: Option<SpiceLevel>,
    #[serde(default, deserialize_with = "serde_helpers::flag")]
    pub is_veg: bool,
    #[serde(
        default,
        deserialize_with = "serde_helpers::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub calories_approx: Option<f64>,
    #[serde(default, deserialize_with = "serde_helpers::text_list")]
    pub allergens: Vec<String>,
    #[serde(default, deserialize_with = "serde_helpers::text_list")]
    pub ingredients: Vec<String>,
}

fn default_spice_level() -> Option<SpiceLevel> {
    Some(SpiceLevel::Medium)
}

impl Default for Enrichment {
    fn default() -> Self {
        Self {
            cuisine: String::new(),
            region: None,
            spice_level: default_spice_level(),
            is_veg: false,
            calories_approx: None,
            allergens: Vec::new(),
            ingredients: Vec::new(),
        }
    }
}

/// One structured menu item after extraction, translation, and enrichment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DishRecord {
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub dish_name: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub translated_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub language_original: Option<String>,
    #[serde(default)]
    pub price: MenuPrice,
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub currency: String,
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub description: String,
    #[serde(default, deserialize_with = "serde_helpers::course_type")]
    pub course_type: CourseType,
    #[serde(default, deserialize_with = "serde_helpers::enrichment")]
    pub enrichment: Enrichment,
    /// Marker left by the digitizer when it could not produce dishes. The key alone sets it,
    /// even when its value is null or blank.
    #[serde(
        default,
        deserialize_with = "serde_helpers::marker",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
}

impl DishRecord {
    pub fn new(dish_name: impl Into<String>) -> Self {
        Self {
            dish_name: dish_name.into(),
            ..Self::default()
        }
    }

    /// Placeholder entry emitted upstream when digitizing a menu failed.
    pub fn upstream_failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_upstream_failure(&self) -> bool {
        self.error.is_some()
    }

    pub fn display_name(&self) -> &str {
        self.translated_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.dish_name)
    }

    pub fn language(&self) -> &str {
        self.language_original
            .as_deref()
            .unwrap_or(UNKNOWN_LANGUAGE)
    }

    pub fn price_amount(&self) -> f64 {
        self.price.amount()
    }

    /// Copy of the record with defaults made explicit; the input is left untouched.
    pub fn with_defaults(&self) -> Self {
        let mut dish = self.clone();
        if dish.language_original.is_none() {
            dish.language_original = Some(UNKNOWN_LANGUAGE.to_string());
        }
        dish
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_fields_fall_back_to_defaults() {
        let dish: DishRecord =
            serde_json::from_value(json!({ "dish_name": "Paneer Tikka" })).expect("dish parses");

        assert_eq!(dish.course_type, CourseType::MainCourse);
        assert_eq!(dish.price, MenuPrice::Missing);
        assert_eq!(dish.price_amount(), 0.0);
        assert_eq!(dish.enrichment.spice_level, Some(SpiceLevel::Medium));
        assert!(!dish.enrichment.is_veg);
        assert_eq!(dish.enrichment.cuisine, "");
        assert_eq!(dish.language(), UNKNOWN_LANGUAGE);
    }

    #[test]
    fn wrong_typed_fields_are_tolerated() {
        let dish: DishRecord = serde_json::from_value(json!({
            "dish_name": "Masala Dosa",
            "price": "abc",
            "course_type": 7,
            "enrichment": {
                "cuisine": null,
                "spice_level": "Fiery",
                "is_veg": "true",
                "calories_approx": "about 300",
                "ingredients": ["Rice", 4, "Potato"]
            }
        }))
        .expect("dish parses");

        assert_eq!(dish.price_amount(), 0.0);
        assert_eq!(dish.course_type, CourseType::MainCourse);
        assert_eq!(dish.enrichment.cuisine, "");
        assert_eq!(dish.enrichment.spice_level, None);
        assert!(dish.enrichment.is_veg);
        assert_eq!(dish.enrichment.calories_approx, None);
        assert_eq!(dish.enrichment.ingredients, vec!["Rice", "Potato"]);
    }

    #[test]
    fn numeric_string_prices_are_compared_as_numbers() {
        assert_eq!(MenuPrice::Text(" 240 ".to_string()).amount(), 240.0);
        assert_eq!(MenuPrice::Text(String::new()).amount(), 0.0);
        assert_eq!(MenuPrice::Amount(f64::NAN).amount(), 0.0);
        assert_eq!(MenuPrice::Amount(120.0).to_string(), "120");
    }

    #[test]
    fn with_defaults_fills_language_on_a_copy() {
        let dish = DishRecord::new("Tiramisu");
        let defaulted = dish.with_defaults();

        assert_eq!(dish.language_original, None);
        assert_eq!(defaulted.language_original.as_deref(), Some(UNKNOWN_LANGUAGE));
    }

    #[test]
    fn display_name_prefers_translation() {
        let mut dish = DishRecord::new("Pollo al Ajillo");
        assert_eq!(dish.display_name(), "Pollo al Ajillo");
        dish.translated_name = Some("Garlic Chicken".to_string());
        assert_eq!(dish.display_name(), "Garlic Chicken");
    }

    #[test]
    fn error_entries_are_flagged() {
        let dish: DishRecord =
            serde_json::from_value(json!({ "error": "AI Parsing failed: timeout" }))
                .expect("marker parses");
        assert!(dish.is_upstream_failure());
    }

    #[test]
    fn blank_or_null_error_keys_still_flag_the_entry() {
        let payloads = [
            json!({ "error": null }),
            json!({ "error": "" }),
            json!({ "error": 0 }),
        ];
        for payload in payloads {
            let dish: DishRecord = serde_json::from_value(payload).expect("marker parses");
            assert!(dish.is_upstream_failure());
        }

        let dish: DishRecord =
            serde_json::from_value(json!({ "dish_name": "Idli" })).expect("dish parses");
        assert!(!dish.is_upstream_failure());
    }

    #[test]
    fn course_labels_round_trip_through_strings() {
        assert_eq!(CourseType::from_label(" main course "), CourseType::MainCourse);
        assert_eq!(
            CourseType::from_label("Side"),
            CourseType::Other("Side".to_string())
        );
        assert_eq!(String::from(CourseType::Dessert), "Dessert");
    }
}
