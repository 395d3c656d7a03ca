use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        QualityError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        QualityError::line("x")
            .to_string()
            .contains("line scoring error:")
    );
    assert!(
        QualityError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        QualityError::UnknownMethod("greenest".to_string())
            .to_string()
            .contains("unknown quality method: greenest")
    );
}

#[test]
fn missing_measure_names_scene_and_measure() {
    let err = QualityError::missing_measure("scene_a.tif", "cloud_frac");
    assert_eq!(
        err.to_string(),
        "scene scene_a.tif lacks quality measure cloud_frac"
    );
}

#[test]
fn fatal_classification() {
    assert!(QualityError::missing_measure("a", "b").is_fatal());
    assert!(QualityError::UnknownMethod("x".to_string()).is_fatal());
    assert!(!QualityError::line("x").is_fatal());
    assert!(!QualityError::validation("x").is_fatal());
}

#[test]
fn json_errors_map_to_serde() {
    let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = QualityError::from(bad);
    assert!(matches!(err, QualityError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = QualityError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
