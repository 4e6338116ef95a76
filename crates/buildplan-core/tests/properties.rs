use std::collections::BTreeMap;

use buildplan_core::properties::{interpolate, load_properties};
use tempfile::TempDir;

#[test]
fn test_load_properties_skips_comments() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("local.properties");
    std::fs::write(
        &path,
        "# generated\n! also a comment\nsdk.dir=/opt/android\n\nflutter.versionCode = 3\n",
    )
    .unwrap();
    let map = load_properties(&path).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map["sdk.dir"], "/opt/android");
    assert_eq!(map["flutter.versionCode"], "3");
}

#[test]
fn test_load_properties_missing_file_is_empty() {
    let tmp = TempDir::new().unwrap();
    let map = load_properties(&tmp.path().join("nope")).unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_interpolate_uses_overrides() {
    let mut env = BTreeMap::new();
    env.insert("KEY_ALIAS".to_string(), "upload".to_string());
    assert_eq!(interpolate("alias=${env:KEY_ALIAS}", &env), "alias=upload");
}

#[test]
fn test_interpolate_unknown_is_empty() {
    let env = BTreeMap::new();
    assert_eq!(
        interpolate("x=${env:BUILDPLAN_SURELY_UNSET_VAR_42}!", &env),
        "x=!"
    );
}

#[test]
fn test_interpolate_does_not_rescan_substituted_text() {
    let mut env = BTreeMap::new();
    env.insert("A".to_string(), "${env:B}".to_string());
    env.insert("B".to_string(), "never".to_string());
    assert_eq!(interpolate("${env:A}", &env), "${env:B}");
}

#[test]
fn test_interpolate_unterminated_is_left_alone() {
    let env = BTreeMap::new();
    assert_eq!(interpolate("${env:OPEN", &env), "${env:OPEN");
}
