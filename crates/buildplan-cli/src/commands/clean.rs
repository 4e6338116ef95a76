use miette::Result;

use buildplan_ops::ops_clean::{self, CleanResult};

pub fn exec() -> Result<()> {
    let root = super::current_build_root()?;
    match ops_clean::clean(&root)? {
        CleanResult::Cleaned(path) => {
            buildplan_util::progress::status("Cleaned", &path.display().to_string());
            println!("Cleaned build directory {}", path.display());
        }
        CleanResult::NothingToClean(path) => {
            println!("Nothing to clean ({} does not exist)", path.display());
        }
    }
    Ok(())
}
