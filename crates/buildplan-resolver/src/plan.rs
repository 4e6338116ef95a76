//! The resolved build plan handed to the external toolchain.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use buildplan_core::compatibility::{CompatibilitySetting, JavaVersion};
use buildplan_core::dependency::DependencyDeclaration;
use buildplan_core::settings::BuildType;
use buildplan_util::errors::BuildError;
use buildplan_util::hash::sha256_bytes;

/// Version of the plan's JSON layout.
pub const PLAN_FORMAT_VERSION: u32 = 1;

/// Identity and platform levels of an application or library project.
///
/// Values are copied verbatim from the settings or the framework; nothing is
/// clamped or downgraded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildTarget {
    pub namespace: Option<String>,
    pub application_id: Option<String>,
    pub compile_sdk: Option<u32>,
    pub target_sdk: Option<u32>,
    pub min_sdk: Option<u32>,
    pub version_code: Option<u32>,
    pub version_name: Option<String>,
    pub ndk_version: Option<String>,
}

/// One project of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProject {
    pub name: String,
    pub project_dir: PathBuf,
    pub build_dir: PathBuf,
    /// Plugin ids in activation order; the framework plugin, if any, is last.
    pub plugins: Vec<String>,
    pub evaluated_after: Vec<String>,
    pub target: Option<BuildTarget>,
    pub compatibility: Option<CompatibilitySetting>,
    pub jvm_target: Option<JavaVersion>,
    pub core_library_desugaring: bool,
    pub dependencies: Vec<DependencyDeclaration>,
    pub build_types: BTreeMap<String, BuildType>,
    pub signing_configs: Vec<String>,
}

/// The complete output of one resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBuildPlan {
    pub format_version: u32,
    pub build_root: PathBuf,
    pub root_build_dir: PathBuf,
    pub framework_plugin: String,
    pub framework_source: Option<PathBuf>,
    pub repositories: Vec<String>,
    pub evaluation_order: Vec<String>,
    pub projects: BTreeMap<String, ResolvedProject>,
    /// SHA-256 of the plan serialized with this field empty.
    pub fingerprint: String,
}

impl ResolvedBuildPlan {
    /// Compute and store the content fingerprint.
    pub fn seal(mut self) -> Result<Self, BuildError> {
        self.fingerprint = String::new();
        let body = self.to_json()?;
        self.fingerprint = sha256_bytes(body.as_bytes());
        Ok(self)
    }

    /// Pretty JSON rendering. Field and map order are fixed, so identical
    /// plans render to identical bytes.
    pub fn to_json(&self) -> Result<String, BuildError> {
        serde_json::to_string_pretty(self).map_err(|e| BuildError::Generic {
            message: format!("Failed to serialize build plan: {e}"),
        })
    }

    /// Projects in evaluation order.
    pub fn projects_in_order(&self) -> impl Iterator<Item = &ResolvedProject> {
        self.evaluation_order
            .iter()
            .filter_map(|name| self.projects.get(name))
    }
}
