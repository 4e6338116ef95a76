use buildplan_util::errors::BuildError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = BuildError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_settings_error_display() {
    let err = BuildError::Settings {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Settings error: bad syntax");
}

#[test]
fn test_plugin_order_error_names_project_and_plugin() {
    let err = BuildError::PluginOrder {
        project: "app".to_string(),
        plugin: "dev.flutter.flutter-gradle-plugin".to_string(),
        position: 1,
        len: 3,
    };
    let msg = err.to_string();
    assert!(msg.contains("'app'"), "got: {msg}");
    assert!(msg.contains("dev.flutter.flutter-gradle-plugin"), "got: {msg}");
    assert!(msg.contains("position 1 of 3"), "got: {msg}");
}

#[test]
fn test_dependency_order_error_display() {
    let err = BuildError::DependencyOrder {
        message: "cycle".to_string(),
    };
    assert_eq!(err.to_string(), "Dependency order error: cycle");
}

#[test]
fn test_compatibility_error_display() {
    let err = BuildError::Compatibility {
        project: "app".to_string(),
        message: "source 17 is newer than target 11".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Compatibility error in project 'app': source 17 is newer than target 11"
    );
}

#[test]
fn test_generic_error_display() {
    let err = BuildError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}
