//! Lenient field decoders for digitizer output.
//!
//! The enrichment step is a language model, so fields arrive missing, null, or with the wrong
//! JSON type. Every decoder here resolves those cases to a default instead of failing the
//! whole menu.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::domain::{CourseType, Enrichment, SpiceLevel};

fn value<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer).map(|value| value.unwrap_or(Value::Null))
}

pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match value(deserializer)? {
        Value::String(raw) => raw,
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}

pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = text(deserializer)?;
    Ok(Some(raw).filter(|raw| !raw.trim().is_empty()))
}

/// Presence flag with the message attached; blank and non-text values keep the flag set.
pub(crate) fn marker<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(match value(deserializer)? {
        Value::String(raw) => raw,
        Value::Null => String::new(),
        other => other.to_string(),
    }))
}

pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match value(deserializer)? {
        Value::Number(number) => number.as_f64().filter(|value| value.is_finite()),
        _ => None,
    })
}

pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match value(deserializer)? {
        Value::Bool(flag) => flag,
        Value::String(raw) => matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "veg"
        ),
        _ => false,
    })
}

pub(crate) fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match value(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(raw) if !raw.trim().is_empty() => Some(raw),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

pub(crate) fn course_type<'de, D>(deserializer: D) -> Result<CourseType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match value(deserializer)? {
        Value::String(raw) if !raw.trim().is_empty() => CourseType::from_label(&raw),
        _ => CourseType::default(),
    })
}

pub(crate) fn spice_level<'de, D>(deserializer: D) -> Result<Option<SpiceLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match value(deserializer)? {
        Value::String(raw) => raw.parse().ok(),
        Value::Null => Some(SpiceLevel::default()),
        _ => None,
    })
}

pub(crate) fn enrichment<'de, D>(deserializer: D) -> Result<Enrichment, D::Error>
where
    D: Deserializer<'de>,
{
    match value(deserializer)? {
        object @ Value::Object(_) => {
            Enrichment::deserialize(object).map_err(serde::de::Error::custom)
        }
        _ => Ok(Enrichment::default()),
    }
}
