use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use buildplan_util::errors::BuildError;

use crate::compatibility::{CompatibilitySetting, JavaVersion};
use crate::framework::FrameworkConfig;

/// The parsed representation of a `Buildplan.toml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub root: RootSettings,

    #[serde(default)]
    pub subprojects: SubprojectSettings,

    #[serde(default)]
    pub framework: Option<FrameworkConfig>,

    #[serde(default)]
    pub projects: BTreeMap<String, ProjectSettings>,
}

/// Build-root settings from `[root]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootSettings {
    /// Root output directory, relative to the build root.
    #[serde(default, rename = "build-dir")]
    pub build_dir: Option<String>,

    /// Project whose evaluation every other project waits for.
    #[serde(default)]
    pub primary: Option<String>,

    #[serde(default, rename = "java-version")]
    pub java_version: Option<JavaVersion>,

    #[serde(default)]
    pub repositories: Vec<String>,
}

/// Settings shared by every sub-project, from `[subprojects]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubprojectSettings {
    /// Levels applied to sub-projects that apply a Java plugin.
    #[serde(default, rename = "java-compatibility")]
    pub java_compatibility: Option<CompatibilitySetting>,

    /// Extra plugin ids treated like the Java plugin.
    #[serde(default, rename = "java-plugins")]
    pub java_plugins: Vec<String>,
}

/// Marker for a value supplied by the cross-platform framework: the literal
/// string `"framework"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkRef {
    Framework,
}

/// A setting that is either declared inline or taken from the framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Declared<T> {
    Framework(FrameworkRef),
    Value(T),
}

/// Per-project settings from `[projects.<name>]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSettings {
    /// Plugin ids in activation order.
    #[serde(default)]
    pub plugins: Vec<String>,

    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default, rename = "application-id")]
    pub application_id: Option<String>,

    #[serde(default, rename = "compile-sdk")]
    pub compile_sdk: Option<Declared<u32>>,

    #[serde(default, rename = "target-sdk")]
    pub target_sdk: Option<Declared<u32>>,

    #[serde(default, rename = "min-sdk")]
    pub min_sdk: Option<Declared<u32>>,

    #[serde(default, rename = "version-code")]
    pub version_code: Option<Declared<u32>>,

    #[serde(default, rename = "version-name")]
    pub version_name: Option<Declared<String>>,

    #[serde(default, rename = "ndk-version")]
    pub ndk_version: Option<String>,

    #[serde(default, rename = "jvm-target")]
    pub jvm_target: Option<JavaVersion>,

    #[serde(default, rename = "core-library-desugaring")]
    pub core_library_desugaring: bool,

    #[serde(default, rename = "compile-options")]
    pub compile_options: Option<CompatibilitySetting>,

    #[serde(default, rename = "evaluation-depends-on")]
    pub evaluation_depends_on: Vec<String>,

    /// Configuration name to `group:artifact:version` coordinates.
    #[serde(default)]
    pub dependencies: BTreeMap<String, Vec<String>>,

    #[serde(default, rename = "build-types")]
    pub build_types: BTreeMap<String, BuildType>,

    #[serde(default, rename = "signing-configs")]
    pub signing_configs: BTreeMap<String, SigningConfig>,
}

/// A build type from `[projects.<name>.build-types.<type>]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildType {
    #[serde(default, rename = "signing-config", skip_serializing_if = "Option::is_none")]
    pub signing_config: Option<String>,
    #[serde(default)]
    pub minify: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debuggable: Option<bool>,
}

/// A named signing configuration. Secrets usually come from `${env:VAR}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SigningConfig {
    #[serde(default, rename = "store-file")]
    pub store_file: Option<String>,
    #[serde(default, rename = "store-password")]
    pub store_password: Option<String>,
    #[serde(default, rename = "key-alias")]
    pub key_alias: Option<String>,
    #[serde(default, rename = "key-password")]
    pub key_password: Option<String>,
}

/// Name of the signing configuration every project has implicitly.
pub const DEBUG_SIGNING_CONFIG: &str = "debug";

impl Settings {
    /// Load and parse a `Buildplan.toml` file from the given path.
    ///
    /// Before parsing, `${env:VAR}` references are resolved using
    /// `.buildplan.env` (if present alongside the settings file) and process
    /// environment variables.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BuildError::Settings {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;

        let dir = path.parent().unwrap_or(Path::new("."));
        let env_vars = crate::properties::load_properties(&dir.join(crate::ENV_FILE))
            .unwrap_or_default();
        let resolved = crate::properties::interpolate(&content, &env_vars);

        Self::parse_toml(&resolved)
    }

    /// Parse a `Buildplan.toml` from a string (no interpolation).
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            BuildError::Settings {
                message: format!("Failed to parse {}: {e}", crate::SETTINGS_FILE),
            }
            .into()
        })
    }
}
