use miette::Result;

use buildplan_core::properties::load_properties;
use buildplan_core::ENV_FILE;

pub fn exec(reveal: bool) -> Result<()> {
    let root = super::current_build_root()?;
    let env_path = root.join(ENV_FILE);
    let env_vars = load_properties(&env_path)?;

    if env_vars.is_empty() {
        println!("No environment variables configured.");
        println!("  {ENV_FILE}: {}", env_path.display());
        return Ok(());
    }

    println!("{ENV_FILE} ({} entries):", env_vars.len());
    for (key, value) in &env_vars {
        let display_value = if reveal { value.as_str() } else { "********" };
        println!("  {key} = {display_value}");
    }

    Ok(())
}
