//! Operation: scaffold a `Buildplan.toml` for a framework application.

use std::path::{Path, PathBuf};

use buildplan_core::SETTINGS_FILE;
use buildplan_util::errors::BuildError;

/// Write a starter `Buildplan.toml` into `dir` for an application `name`.
///
/// Fails if the directory already has one.
pub fn init(dir: &Path, name: &str) -> miette::Result<PathBuf> {
    let path = dir.join(SETTINGS_FILE);
    if path.exists() {
        return Err(BuildError::Settings {
            message: format!("{} already exists", path.display()),
        }
        .into());
    }
    let id = application_id(name);
    let content = TEMPLATE
        .replace("{{id}}", &id)
        .replace("{{plugin}}", buildplan_core::plugin::DEFAULT_FRAMEWORK_PLUGIN);
    std::fs::write(&path, content).map_err(BuildError::Io)?;
    buildplan_util::progress::status("Created", &format!("{SETTINGS_FILE} for {id}"));
    Ok(path)
}

/// `My App` -> `com.example.my_app`.
fn application_id(name: &str) -> String {
    let slug: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let slug = if slug.starts_with(|c: char| c.is_ascii_digit()) || slug.is_empty() {
        format!("app_{slug}")
    } else {
        slug
    };
    format!("com.example.{slug}")
}

const TEMPLATE: &str = r#"[root]
build-dir = "../../build"
primary = "app"
java-version = "17"
repositories = ["google", "maven-central"]

[subprojects.java-compatibility]
source = "11"
target = "11"

[framework]
plugin = "{{plugin}}"
source = "../.."
compile-sdk = 35
target-sdk = 35
version = "1.0.0+1"

[projects.app]
plugins = ["com.android.application", "kotlin-android", "{{plugin}}"]
namespace = "{{id}}"
application-id = "{{id}}"
compile-sdk = "framework"
target-sdk = "framework"
min-sdk = 24
version-code = "framework"
version-name = "framework"
jvm-target = "17"
core-library-desugaring = true

[projects.app.compile-options]
source = "17"
target = "17"

[projects.app.dependencies]
coreLibraryDesugaring = ["com.android.tools:desugar_jdk_libs:2.1.4"]

[projects.app.build-types.release]
signing-config = "debug"
"#;
