use super::*;

#[test]
fn fetch_falls_back_only_when_absent() {
    let params = StrategyParams::from_pairs([("scene_measure", "sharpness")]);
    assert_eq!(
        params.fetch_name_value_def("scene_measure", "NULL"),
        "sharpness"
    );
    assert_eq!(params.fetch_name_value_def("quality", "NULL"), "NULL");
}

#[test]
fn later_pairs_replace_earlier() {
    let params = StrategyParams::from_pairs([("k", "1"), ("k", "2")]);
    assert_eq!(params.len(), 1);
    assert_eq!(params.get("k"), Some("2"));
}

#[test]
fn f64_default_applies_only_to_missing_keys() {
    let params = StrategyParams::from_pairs([("scale_max:x", "garbage")]);
    assert_eq!(params.fetch_f64_def("scale_min:x", 0.5), 0.5);
    assert_eq!(params.fetch_f64_def("scale_max:x", 1.0), 0.0);
}

#[test]
fn float_prefix_is_permissive() {
    assert_eq!(parse_float_prefix("100"), 100.0);
    assert_eq!(parse_float_prefix("  -2.5"), -2.5);
    assert_eq!(parse_float_prefix("0.25abc"), 0.25);
    assert_eq!(parse_float_prefix("1e3"), 1000.0);
    assert_eq!(parse_float_prefix("1e"), 1.0);
    assert_eq!(parse_float_prefix(""), 0.0);
    assert_eq!(parse_float_prefix("abc"), 0.0);
    assert_eq!(parse_float_prefix("1.5µm"), 1.5);
}

#[test]
fn loads_from_json_object() {
    let params =
        StrategyParams::from_json_str(r#"{"scene_measure":"cloud_frac","scale_max:cloud_frac":"100"}"#)
            .unwrap();
    assert_eq!(params.get("scene_measure"), Some("cloud_frac"));
    assert_eq!(params.fetch_f64_def("scale_max:cloud_frac", 1.0), 100.0);

    let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["scale_max:cloud_frac", "scene_measure"]);
}

#[test]
fn rejects_non_string_json_values() {
    assert!(StrategyParams::from_json_str(r#"{"scale_min:x": 3}"#).is_err());
}
