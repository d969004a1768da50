use std::fs;
use std::path::{Path, PathBuf};

use super::normalizer::normalize_dish_name;

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Directory of dish photos laid out as `<root>/<normalized dish name>/<image>`.
#[derive(Debug, Clone)]
pub struct DishImageCatalog {
    root: PathBuf,
}

impl DishImageCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// First photo (by file name) for the dish, or `None` when nothing is on disk.
    pub fn image_for(&self, dish_name: &str) -> Option<PathBuf> {
        let key = normalize_dish_name(dish_name);
        if key.is_empty() {
            return None;
        }

        let dish_dir = self.root.join(key);
        let entries = match fs::read_dir(&dish_dir) {
            Ok(entries) => entries,
            Err(_) => return None,
        };

        let mut images: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_image_extension(path))
            .collect();
        images.sort();

        let image = images.into_iter().next();
        if image.is_none() {
            tracing::debug!(dish = dish_name, dir = %dish_dir.display(), "no dish image found");
        }
        image
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
