//! Resolution entry point.

use std::collections::BTreeMap;

use buildplan_core::build_root::BuildRoot;
use buildplan_core::compatibility::{CompatibilitySetting, JavaVersion};
use buildplan_core::dependency::{Coordinate, DependencyDeclaration};
use buildplan_core::framework::FrameworkValues;
use buildplan_core::plugin::is_java_plugin;
use buildplan_core::repository::repository_url;
use buildplan_core::settings::{Declared, ProjectSettings, DEBUG_SIGNING_CONFIG};
use buildplan_util::errors::BuildError;
use buildplan_util::fs::normalize;

use crate::evaluation::EvaluationGraph;
use crate::layout::Layout;
use crate::plan::{BuildTarget, ResolvedBuildPlan, ResolvedProject, PLAN_FORMAT_VERSION};
use crate::plugin_order;

/// Resolve a loaded build root into a sealed plan.
pub fn resolve(root: &BuildRoot) -> miette::Result<ResolvedBuildPlan> {
    let settings = &root.settings;
    let framework = root.framework_values()?;
    let framework_plugin = framework.plugin_id().to_string();

    let layout = Layout::compute(root)?;
    let primary = root.primary();
    if primary.is_none() && settings.projects.len() > 1 {
        tracing::warn!(
            "no primary project set; {} projects are evaluated without a common predecessor",
            settings.projects.len()
        );
    }
    let graph = EvaluationGraph::build(&settings.projects, primary)?;
    let evaluation_order = graph.order()?;
    tracing::debug!("evaluation order: {}", evaluation_order.join(" -> "));

    let mut projects = BTreeMap::new();
    for name in &evaluation_order {
        let project = &settings.projects[name];
        let plugins = plugin_order::activation_order(name, &project.plugins, &framework_plugin)?;
        let compatibility = merge_compatibility(root, project);
        if let Some(ref c) = compatibility {
            c.validate(name)?;
        }
        let jvm_target = resolve_jvm_target(name, project.jvm_target, compatibility.as_ref())?;
        let dependencies = dependency_declarations(name, project)?;
        check_desugaring(name, project, compatibility.as_ref(), &dependencies)?;
        check_build_types(name, project)?;
        let target = build_target(name, project, &framework)?;

        let build_dir = layout
            .build_dir_of(name)
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| layout.root_build_dir.join(name));

        projects.insert(
            name.clone(),
            ResolvedProject {
                name: name.clone(),
                project_dir: normalize(&root.dir.join(name)),
                build_dir,
                plugins,
                evaluated_after: graph.evaluated_before(name),
                target,
                compatibility,
                jvm_target,
                core_library_desugaring: project.core_library_desugaring,
                dependencies,
                build_types: project.build_types.clone(),
                signing_configs: project.signing_configs.keys().cloned().collect(),
            },
        );
    }

    let mut repositories: Vec<String> = Vec::new();
    for entry in &settings.root.repositories {
        let url = repository_url(entry);
        if !repositories.contains(&url) {
            repositories.push(url);
        }
    }

    let plan = ResolvedBuildPlan {
        format_version: PLAN_FORMAT_VERSION,
        build_root: normalize(&root.dir),
        root_build_dir: layout.root_build_dir,
        framework_plugin,
        framework_source: framework.source.as_ref().map(|s| normalize(&root.dir.join(s))),
        repositories,
        evaluation_order,
        projects,
        fingerprint: String::new(),
    };
    Ok(plan.seal()?)
}

/// Compatibility levels for one project, first match wins: explicit
/// `compile-options`, the shared sub-project levels for Java-plugin projects,
/// then the root `java-version`.
pub fn merge_compatibility(root: &BuildRoot, project: &ProjectSettings) -> Option<CompatibilitySetting> {
    if let Some(explicit) = project.compile_options {
        return Some(explicit);
    }
    let subprojects = &root.settings.subprojects;
    if let Some(shared) = subprojects.java_compatibility {
        if project
            .plugins
            .iter()
            .any(|id| is_java_plugin(id, &subprojects.java_plugins))
        {
            return Some(shared);
        }
    }
    root.settings
        .root
        .java_version
        .map(CompatibilitySetting::uniform)
}

fn resolve_jvm_target(
    project: &str,
    declared: Option<JavaVersion>,
    compatibility: Option<&CompatibilitySetting>,
) -> Result<Option<JavaVersion>, BuildError> {
    match (declared, compatibility) {
        (Some(jvm), Some(c)) if jvm != c.target => Err(BuildError::Compatibility {
            project: project.to_string(),
            message: format!(
                "inconsistent JVM-target compatibility: jvm-target {jvm} but target level {}",
                c.target
            ),
        }),
        (Some(jvm), _) => Ok(Some(jvm)),
        (None, Some(c)) => Ok(Some(c.target)),
        (None, None) => Ok(None),
    }
}

fn dependency_declarations(
    project: &str,
    settings: &ProjectSettings,
) -> Result<Vec<DependencyDeclaration>, BuildError> {
    let mut out = Vec::new();
    for (configuration, coordinates) in &settings.dependencies {
        for raw in coordinates {
            let coordinate = Coordinate::parse(raw).ok_or_else(|| BuildError::Settings {
                message: format!(
                    "project '{project}': dependency '{raw}' in '{configuration}' is not a group:artifact:version coordinate"
                ),
            })?;
            out.push(DependencyDeclaration {
                configuration: configuration.clone(),
                coordinate,
            });
        }
    }
    Ok(out)
}

fn check_desugaring(
    project: &str,
    settings: &ProjectSettings,
    compatibility: Option<&CompatibilitySetting>,
    dependencies: &[DependencyDeclaration],
) -> Result<(), BuildError> {
    if !settings.core_library_desugaring {
        return Ok(());
    }
    if !dependencies.iter().any(DependencyDeclaration::is_desugaring) {
        return Err(BuildError::Settings {
            message: format!(
                "project '{project}' enables core library desugaring but declares no '{}' dependency",
                buildplan_core::dependency::DESUGARING_CONFIGURATION
            ),
        });
    }
    if compatibility.is_none() {
        return Err(BuildError::Settings {
            message: format!(
                "project '{project}' enables core library desugaring without Java compatibility levels"
            ),
        });
    }
    Ok(())
}

fn check_build_types(project: &str, settings: &ProjectSettings) -> Result<(), BuildError> {
    for (build_type, bt) in &settings.build_types {
        if let Some(ref signing) = bt.signing_config {
            if signing != DEBUG_SIGNING_CONFIG && !settings.signing_configs.contains_key(signing) {
                return Err(BuildError::Settings {
                    message: format!(
                        "project '{project}': build type '{build_type}' uses unknown signing config '{signing}'"
                    ),
                });
            }
        }
    }
    Ok(())
}

/// The project's build target, or `None` when it declares no identity or
/// platform levels.
fn build_target(
    project: &str,
    settings: &ProjectSettings,
    framework: &FrameworkValues,
) -> Result<Option<BuildTarget>, BuildError> {
    let declares_target = settings.namespace.is_some()
        || settings.application_id.is_some()
        || settings.compile_sdk.is_some()
        || settings.target_sdk.is_some()
        || settings.min_sdk.is_some()
        || settings.version_code.is_some()
        || settings.version_name.is_some()
        || settings.ndk_version.is_some();
    if !declares_target {
        return Ok(None);
    }

    let sdk = |key: &str, declared: &Option<Declared<u32>>, from_framework: Option<u32>| {
        match declared {
            None => Ok(None),
            Some(Declared::Value(v)) => Ok(Some(*v)),
            Some(Declared::Framework(_)) => from_framework.map(Some).ok_or_else(|| {
                BuildError::Settings {
                    message: format!(
                        "project '{project}': '{key}' refers to the framework, but no framework value is set"
                    ),
                }
            }),
        }
    };

    let compile_sdk = sdk("compile-sdk", &settings.compile_sdk, framework.compile_sdk)?;
    let target_sdk = sdk("target-sdk", &settings.target_sdk, framework.target_sdk)?;
    let min_sdk = sdk("min-sdk", &settings.min_sdk, framework.min_sdk)?;

    if let (Some(min), Some(target)) = (min_sdk, target_sdk) {
        if min > target {
            tracing::warn!("project '{project}': min-sdk {min} is above target-sdk {target}");
        }
    }

    let version_code = match settings.version_code {
        None => None,
        Some(Declared::Value(v)) => Some(v),
        Some(Declared::Framework(_)) => Some(framework.version_code_or_default()),
    };
    let version_name = match settings.version_name {
        None => None,
        Some(Declared::Value(ref v)) => Some(v.clone()),
        Some(Declared::Framework(_)) => Some(framework.version_name_or_default()),
    };

    Ok(Some(BuildTarget {
        namespace: settings.namespace.clone(),
        application_id: settings.application_id.clone(),
        compile_sdk,
        target_sdk,
        min_sdk,
        version_code,
        version_name,
        ndk_version: settings.ndk_version.clone(),
    }))
}
