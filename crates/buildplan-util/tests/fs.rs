use std::path::{Path, PathBuf};

use buildplan_util::fs::{ensure_dir, find_ancestor_with, is_single_component, normalize};
use tempfile::TempDir;

#[test]
fn test_find_ancestor_with_nested() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Buildplan.toml"), "").unwrap();
    let nested = tmp.path().join("a").join("b").join("c");
    std::fs::create_dir_all(&nested).unwrap();
    let result = find_ancestor_with(&nested, "Buildplan.toml");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_ancestor_with_not_found() {
    let tmp = TempDir::new().unwrap();
    let result = find_ancestor_with(tmp.path(), "NonExistent.file");
    assert_eq!(result, None);
}

#[test]
fn test_ensure_dir_creates_nested() {
    let tmp = TempDir::new().unwrap();
    let deep = tmp.path().join("x").join("y").join("z");
    ensure_dir(&deep).unwrap();
    assert!(deep.is_dir());
    ensure_dir(&deep).unwrap();
}

#[test]
fn test_normalize_two_levels_up() {
    let p = normalize(Path::new("/work/app/android/../../build"));
    assert_eq!(p, PathBuf::from("/work/build"));
}

#[test]
fn test_normalize_drops_cur_dir() {
    assert_eq!(normalize(Path::new("/a/./b/.")), PathBuf::from("/a/b"));
}

#[test]
fn test_normalize_keeps_leading_parent_in_relative_path() {
    assert_eq!(normalize(Path::new("../../build")), PathBuf::from("../../build"));
}

#[test]
fn test_normalize_does_not_climb_above_root() {
    assert_eq!(normalize(Path::new("/../x")), PathBuf::from("/x"));
}

#[test]
fn test_single_component() {
    assert!(is_single_component("app"));
    assert!(is_single_component("path_provider_android"));
    assert!(!is_single_component(""));
    assert!(!is_single_component(".."));
    assert!(!is_single_component("a/b"));
    assert!(!is_single_component("a\\b"));
}
