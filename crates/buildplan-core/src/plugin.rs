//! Plugin identifiers and the well-known ids the resolver cares about.

/// Plugin id of the cross-platform framework when none is configured.
pub const DEFAULT_FRAMEWORK_PLUGIN: &str = "dev.flutter.flutter-gradle-plugin";

/// Plugins that apply the Java plugin and therefore pick up the shared
/// sub-project compatibility levels.
pub const JAVA_PLUGINS: &[&str] = &["java", "java-library", "application"];

/// Short plugin aliases and the full ids they stand for.
const ALIASES: &[(&str, &str)] = &[
    ("kotlin-android", "org.jetbrains.kotlin.android"),
    ("kotlin-kapt", "org.jetbrains.kotlin.kapt"),
    ("kotlin", "org.jetbrains.kotlin.jvm"),
];

/// Map a short alias to its full plugin id; other ids are returned unchanged.
pub fn canonical_id(id: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == id)
        .map(|(_, full)| *full)
        .unwrap_or(id)
}

/// Returns `true` if applying `id` implies the Java plugin.
pub fn is_java_plugin(id: &str, extra: &[String]) -> bool {
    JAVA_PLUGINS.contains(&id) || extra.iter().any(|e| e == id)
}
