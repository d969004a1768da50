/// Folder-safe key for a dish name, used to locate its photos.
pub(crate) fn normalize_dish_name(value: &str) -> String {
    let mut key = String::with_capacity(value.len());
    for ch in value.trim().to_lowercase().chars() {
        match ch {
            '&' => key.push_str("and"),
            '-' | ' ' => key.push('_'),
            '(' | ')' | '*' | ',' | '.' | '/' => {}
            other => key.push(other),
        }
    }

    while key.contains("__") {
        key = key.replace("__", "_");
    }

    key.trim_matches('_').to_string()
}
