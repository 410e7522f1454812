use duplex_impose::constants::POINTS_PER_MM;
use duplex_impose::*;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let settings = ImpositionSettings::default();
    assert_eq!(settings.x_offset_mm, 0.0);
    assert_eq!(settings.y_offset_mm, 0.0);
    assert_eq!(settings.gutter_mm, 0.0);
    assert_eq!(settings.scale, 1.0);
    assert_eq!(settings.duplex_correction_mm, 0.0);
    assert!(settings.draw_center_line);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_overrides_return_adjusted_copy() {
    let base = ImpositionSettings::default();
    let adjusted = base
        .with_x_offset_mm(1.5)
        .with_y_offset_mm(-2.0)
        .with_gutter_mm(4.0)
        .with_scale(0.97)
        .with_duplex_correction_mm(0.5)
        .with_center_line(false);

    assert_eq!(base, ImpositionSettings::default());
    assert_eq!(adjusted.x_offset_mm, 1.5);
    assert_eq!(adjusted.y_offset_mm, -2.0);
    assert_eq!(adjusted.gutter_mm, 4.0);
    assert_eq!(adjusted.scale, 0.97);
    assert_eq!(adjusted.duplex_correction_mm, 0.5);
    assert!(!adjusted.draw_center_line);
}

#[test]
fn test_horizontal_offset_per_side() {
    let settings = ImpositionSettings::default()
        .with_x_offset_mm(2.0)
        .with_duplex_correction_mm(1.5);

    assert_eq!(settings.horizontal_offset(SheetSide::Front), Mm(2.0));
    assert_eq!(settings.horizontal_offset(SheetSide::Back), Mm(3.5));
}

#[test]
fn test_mm_conversion() {
    assert!((Mm(10.0).to_pt().value() - 10.0 * POINTS_PER_MM).abs() < 1e-4);
    assert_eq!(Mm(0.0).to_pt().value(), 0.0);
}

#[test]
fn test_validate_rejects_bad_values() {
    let zero_scale = ImpositionSettings::default().with_scale(0.0);
    assert!(matches!(zero_scale.validate(), Err(ImposeError::Config(_))));

    let negative_scale = ImpositionSettings::default().with_scale(-1.0);
    assert!(negative_scale.validate().is_err());

    let nan_offset = ImpositionSettings::default().with_x_offset_mm(f32::NAN);
    assert!(nan_offset.validate().is_err());

    let huge_offset = ImpositionSettings::default().with_y_offset_mm(500.0);
    assert!(huge_offset.validate().is_ok());
}

#[tokio::test]
async fn test_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("calibration.json");

    let settings = ImpositionSettings::default()
        .with_x_offset_mm(1.25)
        .with_duplex_correction_mm(-0.75)
        .with_center_line(false);
    settings.save(&path).await.unwrap();

    let loaded = ImpositionSettings::load(&path).await.unwrap();
    assert_eq!(loaded, settings);
}

#[tokio::test]
async fn test_partial_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("partial.json");
    std::fs::write(&path, r#"{ "gutter_mm": 3.0 }"#).unwrap();

    let loaded = ImpositionSettings::load(&path).await.unwrap();
    assert_eq!(loaded, ImpositionSettings::default().with_gutter_mm(3.0));
}

#[tokio::test]
async fn test_malformed_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "{ scale: ").unwrap();

    let result = ImpositionSettings::load(&path).await;
    assert!(matches!(result, Err(ImposeError::Config(_))));
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = ImpositionSettings::load(temp_dir.path().join("absent.json")).await;
    assert!(matches!(result, Err(ImposeError::Io(_))));
}
