//! Values supplied by the cross-platform framework.
//!
//! A project refers to these with the literal `"framework"` instead of an
//! inline value. They come from the `[framework]` table first and from the
//! `flutter.*` keys of `local.properties` second.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use buildplan_util::errors::BuildError;

use crate::plugin::DEFAULT_FRAMEWORK_PLUGIN;

/// Version code used when neither the settings nor local properties set one.
pub const DEFAULT_VERSION_CODE: u32 = 1;

/// Version name used when neither the settings nor local properties set one.
pub const DEFAULT_VERSION_NAME: &str = "1.0";

/// Framework configuration from `[framework]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameworkConfig {
    /// Plugin id that must be applied last.
    #[serde(default)]
    pub plugin: Option<String>,

    /// Framework project source directory, relative to the build root.
    #[serde(default)]
    pub source: Option<String>,

    #[serde(default, rename = "compile-sdk")]
    pub compile_sdk: Option<u32>,

    #[serde(default, rename = "target-sdk")]
    pub target_sdk: Option<u32>,

    #[serde(default, rename = "min-sdk")]
    pub min_sdk: Option<u32>,

    /// Application version in `name+code` form, e.g. `1.2.3+45`.
    #[serde(default)]
    pub version: Option<String>,
}

/// Framework values after merging `[framework]` with `local.properties`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameworkValues {
    pub plugin: Option<String>,
    pub source: Option<String>,
    pub compile_sdk: Option<u32>,
    pub target_sdk: Option<u32>,
    pub min_sdk: Option<u32>,
    pub version_code: Option<u32>,
    pub version_name: Option<String>,
}

impl FrameworkValues {
    /// Merge the `[framework]` table with `local.properties` entries.
    pub fn merge(
        config: Option<&FrameworkConfig>,
        local: &BTreeMap<String, String>,
    ) -> miette::Result<Self> {
        let default = FrameworkConfig::default();
        let config = config.unwrap_or(&default);

        let (mut version_name, mut version_code) = (None, None);
        if let Some(ref v) = config.version {
            let (name, code) = split_version(v)?;
            version_name = Some(name);
            version_code = code;
        }

        Ok(Self {
            plugin: config.plugin.clone(),
            source: config.source.clone(),
            compile_sdk: config
                .compile_sdk
                .or(local_u32(local, "flutter.compileSdkVersion")?),
            target_sdk: config
                .target_sdk
                .or(local_u32(local, "flutter.targetSdkVersion")?),
            min_sdk: config.min_sdk.or(local_u32(local, "flutter.minSdkVersion")?),
            version_code: match version_code {
                Some(c) => Some(c),
                None => local_u32(local, "flutter.versionCode")?,
            },
            version_name: version_name.or_else(|| local.get("flutter.versionName").cloned()),
        })
    }

    /// The plugin id that must be applied last.
    pub fn plugin_id(&self) -> &str {
        self.plugin.as_deref().unwrap_or(DEFAULT_FRAMEWORK_PLUGIN)
    }

    /// Version code, falling back to [`DEFAULT_VERSION_CODE`].
    pub fn version_code_or_default(&self) -> u32 {
        self.version_code.unwrap_or(DEFAULT_VERSION_CODE)
    }

    /// Version name, falling back to [`DEFAULT_VERSION_NAME`].
    pub fn version_name_or_default(&self) -> String {
        self.version_name
            .clone()
            .unwrap_or_else(|| DEFAULT_VERSION_NAME.to_string())
    }
}

/// Split `1.2.3+45` into (`"1.2.3"`, `Some(45)`).
///
/// Strict semver is tried first; otherwise the text is split on the first
/// `+` so short names like `1.0+3` are accepted too.
pub fn split_version(version: &str) -> miette::Result<(String, Option<u32>)> {
    let invalid = |detail: String| BuildError::Settings {
        message: format!("Invalid framework version '{version}': {detail}"),
    };

    let (name, build) = match semver::Version::parse(version) {
        Ok(v) => {
            let mut name = format!("{}.{}.{}", v.major, v.minor, v.patch);
            if !v.pre.is_empty() {
                name.push('-');
                name.push_str(v.pre.as_str());
            }
            (name, v.build.as_str().to_string())
        }
        Err(_) => match version.split_once('+') {
            Some((name, build)) => (name.to_string(), build.to_string()),
            None => (version.to_string(), String::new()),
        },
    };

    if name.is_empty() {
        return Err(invalid("empty version name".to_string()).into());
    }
    let code = if build.is_empty() {
        None
    } else {
        Some(
            build
                .parse::<u32>()
                .map_err(|e| invalid(format!("build number '{build}': {e}")))?,
        )
    };
    Ok((name, code))
}

fn local_u32(local: &BTreeMap<String, String>, key: &str) -> miette::Result<Option<u32>> {
    match local.get(key) {
        None => Ok(None),
        Some(raw) => raw.parse::<u32>().map(Some).map_err(|e| {
            BuildError::Settings {
                message: format!("local.properties: '{key}' is not a number ({raw}): {e}"),
            }
            .into()
        }),
    }
}
