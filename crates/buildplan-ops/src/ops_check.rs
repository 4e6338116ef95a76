//! Operation: validate the settings tree without emitting a plan.

use std::path::Path;

use buildplan_resolver::resolver;

/// Resolve the build root at `dir` and discard the plan. Returns the plan
/// fingerprint so callers can compare runs.
pub fn check(dir: &Path) -> miette::Result<String> {
    let root = crate::load_build_root(dir)?;
    buildplan_util::progress::status(
        "Checking",
        &format!("{} project(s)", root.settings.projects.len()),
    );
    let plan = resolver::resolve(&root)?;
    buildplan_util::progress::status("Finished", "settings are consistent");
    Ok(plan.fingerprint)
}
