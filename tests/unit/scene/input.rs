use super::*;

#[test]
fn absent_measure_is_negative() {
    let scene = Scene::new("a.tif").with_measure("sharpness", 0.8);
    assert_eq!(scene.quality_measure("sharpness"), 0.8);
    assert_eq!(scene.quality_measure("cloud_frac"), MISSING_MEASURE);
    assert!(scene.quality_measure("NULL") < 0.0);
    assert_eq!(scene.filename(), "a.tif");
}

#[test]
fn set_measure_overwrites() {
    let mut scene = Scene::new("a.tif");
    scene.set_measure("acquisition_date", 1377000216.0);
    scene.set_measure("acquisition_date", 1377001011.0);
    assert_eq!(scene.quality_measure("acquisition_date"), 1377001011.0);
}

#[test]
fn loads_metadata_json_without_measures() {
    let scene = Scene::from_json_str(r#"{"filename":"b.tif"}"#).unwrap();
    assert_eq!(scene.filename, "b.tif");
    assert!(scene.quality_measures.is_empty());

    let scene =
        Scene::from_json_str(r#"{"filename":"c.tif","quality_measures":{"cloud_frac":20.0}}"#)
            .unwrap();
    assert_eq!(scene.quality_measure("cloud_frac"), 20.0);
}
