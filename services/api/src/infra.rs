use menu_advisor::workflows::menu::{CourseType, SpiceLevel};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_spice(raw: &str) -> Result<SpiceLevel, String> {
    raw.parse::<SpiceLevel>().map_err(|err| err.to_string())
}

pub(crate) fn parse_course(raw: &str) -> Result<CourseType, String> {
    if raw.trim().is_empty() {
        return Err("course name cannot be empty".to_string());
    }
    Ok(CourseType::from_label(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spice_levels_parse_case_insensitively() {
        assert_eq!(parse_spice(" LOW "), Ok(SpiceLevel::Low));
        assert!(parse_spice("mild").is_err());
    }

    #[test]
    fn courses_keep_unknown_labels() {
        assert_eq!(parse_course("main course"), Ok(CourseType::MainCourse));
        assert_eq!(
            parse_course("Chef's Tasting"),
            Ok(CourseType::Other("Chef's Tasting".to_string()))
        );
        assert!(parse_course("  ").is_err());
    }
}
