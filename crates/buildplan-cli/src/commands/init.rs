use miette::Result;

use buildplan_util::errors::BuildError;

pub fn exec(name: &str) -> Result<()> {
    let cwd = std::env::current_dir().map_err(BuildError::Io)?;
    let path = buildplan_ops::ops_init::init(&cwd, name)?;
    println!("Created {}", path.display());
    Ok(())
}
