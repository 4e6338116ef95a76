use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root output directory used when `root.build-dir` is not set: a sibling
/// `build/` two levels above the build root.
pub const DEFAULT_BUILD_DIR: &str = "../../build";

/// File name of the emitted plan inside the root output directory.
pub const DEFAULT_PLAN_FILE: &str = "build-plan.json";

/// Global user configuration loaded from `~/.buildplan/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Fallbacks from `[defaults]` used when a settings file leaves them out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, rename = "framework-plugin")]
    pub framework_plugin: Option<String>,
    /// Primary project used when `root.primary` is not set.
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default = "default_build_dir", rename = "build-dir")]
    pub build_dir: String,
    #[serde(default = "default_plan_file", rename = "plan-file")]
    pub plan_file: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            framework_plugin: None,
            primary: None,
            build_dir: default_build_dir(),
            plan_file: default_plan_file(),
        }
    }
}

fn default_build_dir() -> String {
    DEFAULT_BUILD_DIR.to_string()
}

fn default_plan_file() -> String {
    DEFAULT_PLAN_FILE.to_string()
}

impl GlobalConfig {
    /// Load the global configuration, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load the global configuration from an explicit path.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            buildplan_util::errors::BuildError::Generic {
                message: format!("Failed to read global config: {e}"),
            }
        })?;
        toml::from_str(&content).map_err(|e| {
            buildplan_util::errors::BuildError::Generic {
                message: format!("Failed to parse global config: {e}"),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the buildplan data directory (`~/.buildplan/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".buildplan")
}
