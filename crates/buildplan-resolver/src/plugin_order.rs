//! Plugin activation order checks.

use std::collections::HashSet;

use buildplan_core::plugin::canonical_id;
use buildplan_util::errors::BuildError;

/// Validate a project's plugin list and return its activation order.
///
/// The framework plugin, when applied, must be the last entry. A plugin
/// listed twice (directly or through an alias) is rejected. The declared
/// order is returned unchanged.
pub fn activation_order(
    project: &str,
    plugins: &[String],
    framework_plugin: &str,
) -> Result<Vec<String>, BuildError> {
    let mut seen = HashSet::new();
    for id in plugins {
        if !seen.insert(canonical_id(id)) {
            return Err(BuildError::Settings {
                message: format!("project '{project}' applies plugin '{id}' more than once"),
            });
        }
    }

    let framework = canonical_id(framework_plugin);
    if let Some(position) = plugins.iter().position(|id| canonical_id(id) == framework) {
        if position + 1 != plugins.len() {
            return Err(BuildError::PluginOrder {
                project: project.to_string(),
                plugin: plugins[position].clone(),
                position: position + 1,
                len: plugins.len(),
            });
        }
    }

    Ok(plugins.to_vec())
}
