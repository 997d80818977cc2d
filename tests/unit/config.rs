use super::*;

#[test]
fn defaults_match_high_dpi_backing_store() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.pixel_ratio, 2.0);
    assert_eq!(cfg.slow_frame_budget_ms, 15.0);
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.coordinate_system, None);
    cfg.validate().unwrap();
}

#[test]
fn partial_json_fills_in_defaults() {
    let cfg = EngineConfig::from_json_str(r#"{"seed": 7, "pixel_ratio": 1}"#).unwrap();
    assert_eq!(cfg.seed, Some(7));
    assert_eq!(cfg.pixel_ratio, 1.0);
    assert_eq!(cfg.slow_frame_budget_ms, 15.0);
}

#[test]
fn coordinate_system_parses() {
    let cfg =
        EngineConfig::from_json_str(r#"{"coordinate_system": {"width": 100, "height": 50}}"#)
            .unwrap();
    assert_eq!(
        cfg.coordinate_system,
        Some(Size {
            width: 100.0,
            height: 50.0
        })
    );
}

#[test]
fn rejects_bad_pixel_ratio() {
    let err = EngineConfig::from_json_str(r#"{"pixel_ratio": 0}"#).unwrap_err();
    assert!(matches!(err, ArtgenError::Config(_)));
}

#[test]
fn rejects_zero_coordinate_system() {
    let err =
        EngineConfig::from_json_str(r#"{"coordinate_system": {"width": 0, "height": 50}}"#)
            .unwrap_err();
    assert!(err.to_string().contains("coordinate_system"));
}

#[test]
fn rejects_unknown_fields_and_garbage() {
    assert!(matches!(
        EngineConfig::from_json_str(r#"{"pixel_ration": 2}"#),
        Err(ArtgenError::Serde(_))
    ));
    assert!(matches!(
        EngineConfig::from_json_str("not json"),
        Err(ArtgenError::Serde(_))
    ));
}

#[test]
fn from_path_reads_file() {
    let dir = std::env::temp_dir().join(format!("artgen-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("engine.json");
    std::fs::write(&path, r#"{"slow_frame_budget_ms": 30}"#).unwrap();

    let cfg = EngineConfig::from_path(&path).unwrap();
    assert_eq!(cfg.slow_frame_budget_ms, 30.0);

    let missing = EngineConfig::from_path(dir.join("missing.json")).unwrap_err();
    assert!(matches!(missing, ArtgenError::Config(_)));
    let _ = std::fs::remove_dir_all(&dir);
}
