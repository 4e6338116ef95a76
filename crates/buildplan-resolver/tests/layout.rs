use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use buildplan_core::build_root::BuildRoot;
use buildplan_core::settings::Settings;
use buildplan_resolver::layout::Layout;

fn root(toml: &str) -> BuildRoot {
    BuildRoot::from_settings(
        Path::new("/work/edugenius/frontend/android"),
        Settings::parse_toml(toml).unwrap(),
    )
}

#[test]
fn default_root_is_two_levels_up() {
    let layout = Layout::compute(&root("[projects.app]\n")).unwrap();
    assert_eq!(layout.root_build_dir, PathBuf::from("/work/edugenius/build"));
    assert_eq!(
        layout.build_dir_of("app"),
        Some(Path::new("/work/edugenius/build/app"))
    );
}

#[test]
fn explicit_build_dir_is_used() {
    let layout = Layout::compute(&root(
        r#"
[root]
build-dir = "out"

[projects.app]
"#,
    ))
    .unwrap();
    assert_eq!(
        layout.root_build_dir,
        PathBuf::from("/work/edugenius/frontend/android/out")
    );
}

#[test]
fn project_dirs_are_unique_and_nested() {
    let layout = Layout::compute(&root(
        r#"
[projects.app]
[projects.camera]
[projects.path_provider_android]
"#,
    ))
    .unwrap();
    let dirs: BTreeSet<&Path> = layout
        .projects
        .values()
        .map(|m| m.build_dir.as_path())
        .collect();
    assert_eq!(dirs.len(), 3);
    for dir in dirs {
        assert_eq!(dir.parent(), Some(layout.root_build_dir.as_path()));
    }
}

#[test]
fn project_name_with_separator_is_rejected() {
    let result = Layout::compute(&root(
        r#"
[projects."nested/app"]
"#,
    ));
    assert!(result.is_err());
}

#[test]
fn parent_dir_project_name_is_rejected() {
    let result = Layout::compute(&root(
        r#"
[projects.".."]
"#,
    ));
    assert!(result.is_err());
}

#[test]
fn project_named_like_the_plan_file_is_rejected() {
    let err = Layout::compute(&root(
        r#"
[projects."build-plan.json"]
"#,
    ))
    .unwrap_err();
    assert!(err.to_string().contains("plan file"), "got: {err}");
}
