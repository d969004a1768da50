//! Menu data as delivered by the upstream digitizer.
//!
//! Digitizing (OCR, translation, enrichment) happens elsewhere; this module only decodes the
//! resulting JSON into [`DishRecord`]s and resolves dish photos for display.

mod domain;
mod images;
mod normalizer;
mod serde_helpers;

pub use domain::{
    CourseType, DishRecord, Enrichment, MenuPrice, SpiceLevel, SpiceLevelError, UNKNOWN_LANGUAGE,
};
pub use images::DishImageCatalog;

use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug)]
pub enum MenuImportError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for MenuImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuImportError::Io(err) => write!(f, "failed to read menu export: {}", err),
            MenuImportError::Json(err) => write!(f, "invalid menu JSON: {}", err),
        }
    }
}

impl std::error::Error for MenuImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MenuImportError::Io(err) => Some(err),
            MenuImportError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for MenuImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for MenuImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Decodes digitizer payloads into a single combined menu.
pub struct MenuImporter;

impl MenuImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<DishRecord>, MenuImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Combine several exports (one per photographed menu page) in the given order.
    pub fn from_paths<I, P>(paths: I) -> Result<Vec<DishRecord>, MenuImportError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut payloads = Vec::new();
        for path in paths {
            let file = std::fs::File::open(path)?;
            payloads.push(serde_json::from_reader(file)?);
        }
        Ok(Self::combine(payloads))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<DishRecord>, MenuImportError> {
        let payload: Value = serde_json::from_reader(reader)?;
        Ok(Self::combine([payload]))
    }

    pub fn from_json_str(raw: &str) -> Result<Vec<DishRecord>, MenuImportError> {
        let payload: Value = serde_json::from_str(raw)?;
        Ok(Self::combine([payload]))
    }

    /// Payloads that are not JSON arrays are skipped, as are array items that are not objects.
    pub fn combine<I>(payloads: I) -> Vec<DishRecord>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut menu = Vec::new();

        for (page, payload) in payloads.into_iter().enumerate() {
            let items = match payload {
                Value::Array(items) => items,
                other => {
                    warn!(page, kind = json_kind(&other), "skipping non-list menu payload");
                    continue;
                }
            };

            for item in items {
                match serde_json::from_value::<DishRecord>(item) {
                    Ok(dish) => menu.push(dish),
                    Err(err) => warn!(page, error = %err, "skipping malformed menu entry"),
                }
            }
        }

        debug!(dishes = menu.len(), "menu combined");
        menu
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
