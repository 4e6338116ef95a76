//! Output directory remapping.
//!
//! The root output directory is moved away from the `build/` convention to
//! the configured `build-dir` (by default a sibling two levels up), and each
//! project gets `<root output>/<project name>`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use buildplan_core::build_root::BuildRoot;
use buildplan_util::errors::BuildError;
use buildplan_util::fs::{is_single_component, normalize};

/// A project name mapped to the directory that replaces its default output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDirectoryMapping {
    pub project: String,
    pub build_dir: PathBuf,
}

/// Remapped output directories for a whole build root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub root_build_dir: PathBuf,
    pub projects: BTreeMap<String, OutputDirectoryMapping>,
}

impl Layout {
    /// Compute the layout for every declared project.
    ///
    /// Project directories share the root output directory with the plan
    /// file, so a project may not take the plan file's name.
    pub fn compute(root: &BuildRoot) -> Result<Self, BuildError> {
        let root_build_dir = root_build_dir(root);
        let mut projects = BTreeMap::new();
        for name in root.settings.projects.keys() {
            if !is_single_component(name) {
                return Err(BuildError::Settings {
                    message: format!(
                        "project name '{name}' must be a single directory name (no path separators, not '.' or '..')"
                    ),
                });
            }
            if name == root.plan_file() {
                return Err(BuildError::Settings {
                    message: format!(
                        "project name '{name}' collides with the plan file in {}",
                        root_build_dir.display()
                    ),
                });
            }
            projects.insert(
                name.clone(),
                OutputDirectoryMapping {
                    project: name.clone(),
                    build_dir: root_build_dir.join(name),
                },
            );
        }
        tracing::debug!(
            "remapped root output to {} for {} project(s)",
            root_build_dir.display(),
            projects.len()
        );
        Ok(Self {
            root_build_dir,
            projects,
        })
    }

    /// Output directory of `project`, if declared.
    pub fn build_dir_of(&self, project: &str) -> Option<&Path> {
        self.projects.get(project).map(|m| m.build_dir.as_path())
    }
}

/// The remapped root output directory, lexically normalized.
pub fn root_build_dir(root: &BuildRoot) -> PathBuf {
    normalize(&root.dir.join(root.build_dir_setting()))
}
