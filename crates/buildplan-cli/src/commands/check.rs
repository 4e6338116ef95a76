use miette::Result;

pub fn exec() -> Result<()> {
    let root = super::current_build_root()?;
    let fingerprint = buildplan_ops::ops_check::check(&root)?;
    println!("OK {fingerprint}");
    Ok(())
}
