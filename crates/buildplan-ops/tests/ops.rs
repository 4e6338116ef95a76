use std::path::{Path, PathBuf};

use buildplan_ops::ops_check::check;
use buildplan_ops::ops_clean::{clean, CleanResult};
use buildplan_ops::ops_init::init;
use buildplan_ops::ops_resolve::{resolve, ResolveOptions};
use buildplan_ops::locate_build_root;
use tempfile::TempDir;

/// `<tmp>/app/android` so the default `../../build` stays inside `<tmp>`.
fn android_dir(tmp: &TempDir) -> PathBuf {
    let dir = tmp.path().join("app").join("android");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_settings(dir: &Path, content: &str) {
    std::fs::write(dir.join("Buildplan.toml"), content).unwrap();
}

#[test]
fn test_init_then_resolve_writes_plan() {
    let tmp = TempDir::new().unwrap();
    let dir = android_dir(&tmp);
    init(&dir, "Edu Genius").unwrap();

    let result = resolve(&dir, &ResolveOptions::default()).unwrap();
    let written = result.written_to.unwrap();
    assert_eq!(written, tmp.path().join("build").join("build-plan.json"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written).unwrap()).unwrap();
    assert_eq!(json["fingerprint"], result.plan.fingerprint.as_str());
    assert_eq!(
        json["projects"]["app"]["target"]["namespace"],
        "com.example.edu_genius"
    );
}

#[test]
fn test_init_refuses_existing_settings() {
    let tmp = TempDir::new().unwrap();
    let dir = android_dir(&tmp);
    init(&dir, "app").unwrap();
    assert!(init(&dir, "app").is_err());
}

#[test]
fn test_resolve_twice_writes_identical_bytes() {
    let tmp = TempDir::new().unwrap();
    let dir = android_dir(&tmp);
    init(&dir, "app").unwrap();

    let first = resolve(&dir, &ResolveOptions::default()).unwrap();
    let bytes_a = std::fs::read(first.written_to.unwrap()).unwrap();
    let second = resolve(&dir, &ResolveOptions::default()).unwrap();
    let bytes_b = std::fs::read(second.written_to.unwrap()).unwrap();
    assert_eq!(bytes_a, bytes_b);
}

#[test]
fn test_failed_resolve_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let dir = android_dir(&tmp);
    write_settings(
        &dir,
        r#"
[projects.app]
plugins = ["dev.flutter.flutter-gradle-plugin", "com.android.application"]
"#,
    );
    assert!(resolve(&dir, &ResolveOptions::default()).is_err());
    assert!(!tmp.path().join("build").exists());
}

#[test]
fn test_check_returns_fingerprint() {
    let tmp = TempDir::new().unwrap();
    let dir = android_dir(&tmp);
    init(&dir, "app").unwrap();
    let fingerprint = check(&dir).unwrap();
    assert_eq!(fingerprint.len(), 64);
    assert!(!tmp.path().join("build").exists());
}

#[test]
fn test_clean_removes_root_output() {
    let tmp = TempDir::new().unwrap();
    let dir = android_dir(&tmp);
    init(&dir, "app").unwrap();
    resolve(&dir, &ResolveOptions::default()).unwrap();
    std::fs::create_dir_all(tmp.path().join("build/app/outputs")).unwrap();

    let result = clean(&dir).unwrap();
    assert_eq!(result, CleanResult::Cleaned(tmp.path().join("build")));
    assert!(!tmp.path().join("build").exists());
    assert!(dir.join("Buildplan.toml").exists());
}

#[test]
fn test_clean_nothing_to_clean() {
    let tmp = TempDir::new().unwrap();
    let dir = android_dir(&tmp);
    init(&dir, "app").unwrap();
    assert!(matches!(clean(&dir).unwrap(), CleanResult::NothingToClean(_)));
}

#[test]
fn test_clean_works_despite_plugin_order_violation() {
    let tmp = TempDir::new().unwrap();
    let dir = android_dir(&tmp);
    write_settings(
        &dir,
        r#"
[projects.app]
plugins = ["dev.flutter.flutter-gradle-plugin", "com.android.application"]
"#,
    );
    std::fs::create_dir_all(tmp.path().join("build/app")).unwrap();
    assert!(matches!(clean(&dir).unwrap(), CleanResult::Cleaned(_)));
}

#[test]
fn test_clean_refuses_ancestor_of_build_root() {
    let tmp = TempDir::new().unwrap();
    let dir = android_dir(&tmp);
    write_settings(
        &dir,
        r#"
[root]
build-dir = ".."
"#,
    );
    assert!(clean(&dir).is_err());
    assert!(dir.exists());
}

#[test]
fn test_locate_build_root_from_nested_dir() {
    let tmp = TempDir::new().unwrap();
    let dir = android_dir(&tmp);
    init(&dir, "app").unwrap();
    let nested = dir.join("app").join("src");
    std::fs::create_dir_all(&nested).unwrap();
    assert_eq!(locate_build_root(&nested).unwrap(), dir);
}

#[test]
fn test_locate_build_root_missing() {
    let tmp = TempDir::new().unwrap();
    assert!(locate_build_root(tmp.path()).is_err());
}

#[test]
fn test_clean_refuses_ancestor_of_relative_build_root() {
    let tmp = TempDir::new().unwrap();
    let dir = android_dir(&tmp);
    write_settings(
        &dir,
        r#"
[root]
build-dir = ".."
"#,
    );

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(&dir).unwrap();
    let result = clean(Path::new("."));
    std::env::set_current_dir(previous).unwrap();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Refusing to clean"), "got: {err}");
    assert!(dir.join("Buildplan.toml").is_file());
}
