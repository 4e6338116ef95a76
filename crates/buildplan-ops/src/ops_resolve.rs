//! Operation: resolve the settings tree and emit the build plan.

use std::path::{Path, PathBuf};

use buildplan_resolver::plan::ResolvedBuildPlan;
use buildplan_resolver::resolver;
use buildplan_util::errors::BuildError;
use buildplan_util::fs::ensure_dir;

/// Options for `buildplan resolve`.
#[derive(Debug, Default)]
pub struct ResolveOptions {
    /// Print the plan instead of writing it to the root output directory.
    pub stdout: bool,
}

/// Outcome of a resolve operation.
pub struct ResolveResult {
    pub plan: ResolvedBuildPlan,
    /// Where the plan was written, or `None` when printed.
    pub written_to: Option<PathBuf>,
}

/// Resolve the build root at `dir` and emit its plan.
///
/// Nothing is written unless resolution succeeds as a whole.
pub fn resolve(dir: &Path, opts: &ResolveOptions) -> miette::Result<ResolveResult> {
    let root = crate::load_build_root(dir)?;
    buildplan_util::progress::status(
        "Resolving",
        &format!("{} project(s) in {}", root.settings.projects.len(), dir.display()),
    );

    let plan = resolver::resolve(&root)?;
    let json = plan.to_json()?;

    if opts.stdout {
        println!("{json}");
        return Ok(ResolveResult {
            plan,
            written_to: None,
        });
    }

    ensure_dir(&plan.root_build_dir).map_err(BuildError::Io)?;
    let path = root.plan_path(&plan.root_build_dir);
    std::fs::write(&path, format!("{json}\n")).map_err(BuildError::Io)?;
    tracing::debug!("wrote plan {} ({})", path.display(), plan.fingerprint);

    buildplan_util::progress::status("Finished", &format!("plan written to {}", path.display()));
    Ok(ResolveResult {
        plan,
        written_to: Some(path),
    })
}
