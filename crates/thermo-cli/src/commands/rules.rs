use std::path::Path;

use anyhow::bail;

use thermo_cooling::default_rule_spec;
use thermo_fuzzy::{RuleBase, RuleBaseSpec};

pub fn init(path: &str, force: bool) -> anyhow::Result<()> {
    let path = Path::new(path);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    default_rule_spec().save(path)?;
    println!("✓ Wrote default cooling rules to {}", path.display());
    Ok(())
}

pub fn validate(path: &str) -> anyhow::Result<()> {
    let spec = RuleBaseSpec::from_file(Path::new(path))?;
    let rule_base = RuleBase::compile(spec)?;
    println!(
        "✓ {} is valid: {} variables, {} rules, {} output levels",
        path,
        rule_base.registry().variables().len(),
        rule_base.rules().len(),
        rule_base.outputs().len(),
    );
    Ok(())
}
