use super::*;

#[test]
fn is_test_defaults_to_false() {
    let json = r#"{"maps":[{"name":"annecy"},{"name":"plains","is_test":true}]}"#;
    let catalog = Catalog::from_reader(json.as_bytes()).unwrap();
    assert_eq!(
        catalog.maps,
        vec![MapDescriptor::new("annecy"), MapDescriptor::test("plains")]
    );
}

#[test]
fn declared_order_is_kept() {
    let json = r#"{"maps":[{"name":"paris"},{"name":"annecy"},{"name":"africa"}]}"#;
    let catalog = Catalog::from_reader(json.as_bytes()).unwrap();
    let names: Vec<_> = catalog.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["paris", "annecy", "africa"]);
}

#[test]
fn remove_small_is_inverse_of_is_test() {
    assert!(MapDescriptor::new("annecy").remove_small());
    assert!(!MapDescriptor::test("plains").remove_small());
}

#[test]
fn malformed_catalog_is_a_config_error() {
    let err = Catalog::from_reader("{\"maps\": [".as_bytes()).unwrap_err();
    assert!(matches!(err, MapGenError::Config(_)));
}

#[test]
fn missing_catalog_file_names_the_path() {
    let err = Catalog::from_path("target/does-not-exist/catalog.json").unwrap_err();
    assert!(err.to_string().contains("does-not-exist/catalog.json"));
}

#[test]
fn validate_rejects_bad_names() {
    for bad in ["", ".", "..", "a/b", "a\\b"] {
        let catalog = Catalog::new(vec![MapDescriptor::new(bad)]);
        assert!(catalog.validate().is_err(), "{bad:?} should be rejected");
    }
}

#[test]
fn validate_rejects_duplicates() {
    let catalog = Catalog::new(vec![
        MapDescriptor::new("annecy"),
        MapDescriptor::test("annecy"),
    ]);
    let err = catalog.validate().unwrap_err();
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn builtin_catalog_is_valid() {
    let catalog = Catalog::builtin();
    catalog.validate().unwrap();
    assert_eq!(catalog.len(), 3);
    assert!(catalog.iter().any(|m| m.is_test));
}
