use miette::Result;

use buildplan_ops::ops_resolve::{self, ResolveOptions};

pub fn exec(stdout: bool) -> Result<()> {
    let root = super::current_build_root()?;
    let result = ops_resolve::resolve(&root, &ResolveOptions { stdout })?;
    if let Some(path) = result.written_to {
        println!("Wrote {} (fingerprint {})", path.display(), result.plan.fingerprint);
    }
    Ok(())
}
