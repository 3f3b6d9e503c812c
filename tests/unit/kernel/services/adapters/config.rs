use super::*;
use crate::core::ViewError;
use crate::ui::core::FontMetrics;
use tempfile::tempdir;

#[test]
fn test_config_service_defaults() {
    let service = ConfigService::new();
    assert_eq!(service.config().blink_interval_ms, 1000);
    assert_eq!(service.config().font, FontMetrics::default());
}

#[test]
fn test_load_from_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("view.json");
    std::fs::write(&path, r#"{"text_origin_x": 12.0, "font": {"advance": 7.0}}"#).unwrap();

    let service = ConfigService::load_from_path(&path).unwrap();
    assert_eq!(service.config().text_origin_x, 12.0);
    assert_eq!(service.config().font.advance, 7.0);
    assert_eq!(service.config().font.ascent, FontMetrics::default().ascent);
}

#[test]
fn test_load_from_path_errors() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(
        ConfigService::load_from_path(&missing),
        Err(ViewError::Io(_))
    ));

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{ not json").unwrap();
    assert!(matches!(
        ConfigService::load_from_path(&bad),
        Err(ViewError::Json(_))
    ));
}
