pub mod ops_check;
pub mod ops_clean;
pub mod ops_init;
pub mod ops_resolve;

use std::path::{Path, PathBuf};

use buildplan_core::build_root::BuildRoot;
use buildplan_core::config::GlobalConfig;
use buildplan_util::errors::BuildError;
use buildplan_util::fs::find_ancestor_with;

/// Walk up from `start` to the directory holding `Buildplan.toml`.
pub fn locate_build_root(start: &Path) -> miette::Result<PathBuf> {
    find_ancestor_with(start, buildplan_core::SETTINGS_FILE).ok_or_else(|| {
        BuildError::Settings {
            message: format!(
                "Could not find {} in this directory or any parent",
                buildplan_core::SETTINGS_FILE
            ),
        }
        .into()
    })
}

/// Load the build root at `dir` with the user's global configuration.
pub fn load_build_root(dir: &Path) -> miette::Result<BuildRoot> {
    let config = GlobalConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable global config: {e}");
        GlobalConfig::default()
    });
    BuildRoot::load(dir, config)
}
