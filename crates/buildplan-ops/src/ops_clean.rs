//! Operation: delete the resolved root output directory.

use std::path::{Path, PathBuf};

use buildplan_resolver::layout;
use buildplan_util::errors::BuildError;
use buildplan_util::fs::normalize;

/// Remove the root output directory of the build root at `dir`.
///
/// Only the settings and the layout are needed, so a project with a plugin
/// order violation can still be cleaned. A root output directory that is the
/// build root itself or one of its ancestors is refused.
pub fn clean(dir: &Path) -> miette::Result<CleanResult> {
    let root = crate::load_build_root(dir)?;
    let target = layout::root_build_dir(&root);

    let build_root = normalize(&root.dir);
    if build_root.starts_with(&target) {
        return Err(BuildError::Generic {
            message: format!(
                "Refusing to clean {}: it contains the build root {}",
                target.display(),
                build_root.display()
            ),
        }
        .into());
    }

    if target.exists() {
        std::fs::remove_dir_all(&target).map_err(BuildError::Io)?;
        tracing::debug!("removed {}", target.display());
        Ok(CleanResult::Cleaned(target))
    } else {
        Ok(CleanResult::NothingToClean(target))
    }
}

/// Result of a clean operation.
#[derive(Debug, PartialEq, Eq)]
pub enum CleanResult {
    Cleaned(PathBuf),
    NothingToClean(PathBuf),
}
