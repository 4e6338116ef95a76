use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use buildplan_util::errors::BuildError;
use buildplan_util::fs::normalize;

use crate::config::GlobalConfig;
use crate::framework::FrameworkValues;
use crate::settings::Settings;

/// A loaded build root: the directory holding `Buildplan.toml`, its parsed
/// settings, and the machine-local properties next to it.
#[derive(Debug, Clone)]
pub struct BuildRoot {
    pub dir: PathBuf,
    pub settings: Settings,
    pub local_properties: BTreeMap<String, String>,
    pub config: GlobalConfig,
}

impl BuildRoot {
    /// Load `Buildplan.toml` and `local.properties` from `dir`.
    ///
    /// A relative `dir` is made absolute against the current directory, so
    /// every path derived from the root is absolute and normalized.
    pub fn load(dir: &Path, config: GlobalConfig) -> miette::Result<Self> {
        let dir = normalize(&std::path::absolute(dir).map_err(BuildError::Io)?);
        let settings_path = dir.join(crate::SETTINGS_FILE);
        if !settings_path.is_file() {
            return Err(BuildError::Settings {
                message: format!(
                    "No {} found in {}",
                    crate::SETTINGS_FILE,
                    dir.display()
                ),
            }
            .into());
        }
        let settings = Settings::from_path(&settings_path)?;
        let local_properties =
            crate::properties::load_properties(&dir.join(crate::LOCAL_PROPERTIES_FILE))?;
        tracing::debug!(
            "loaded {} with {} project(s)",
            settings_path.display(),
            settings.projects.len()
        );
        Ok(Self {
            dir,
            settings,
            local_properties,
            config,
        })
    }

    /// Build a root from already-parsed settings (no filesystem access).
    pub fn from_settings(dir: &Path, settings: Settings) -> Self {
        Self {
            dir: dir.to_path_buf(),
            settings,
            local_properties: BTreeMap::new(),
            config: GlobalConfig::default(),
        }
    }

    /// Framework values merged from `[framework]`, `local.properties` and
    /// the global default plugin id.
    pub fn framework_values(&self) -> miette::Result<FrameworkValues> {
        let mut values =
            FrameworkValues::merge(self.settings.framework.as_ref(), &self.local_properties)?;
        if values.plugin.is_none() {
            values.plugin = self.config.defaults.framework_plugin.clone();
        }
        Ok(values)
    }

    /// The primary project: `root.primary`, else the global default.
    pub fn primary(&self) -> Option<&str> {
        self.settings
            .root
            .primary
            .as_deref()
            .or(self.config.defaults.primary.as_deref())
    }

    /// Name of the plan file written into the root output directory.
    pub fn plan_file(&self) -> &str {
        &self.config.defaults.plan_file
    }

    /// The declared root output directory, relative to [`Self::dir`].
    pub fn build_dir_setting(&self) -> &str {
        self.settings
            .root
            .build_dir
            .as_deref()
            .unwrap_or(&self.config.defaults.build_dir)
    }

    /// Path of the emitted plan file inside `root_build_dir`.
    pub fn plan_path(&self, root_build_dir: &Path) -> PathBuf {
        root_build_dir.join(self.plan_file())
    }
}
