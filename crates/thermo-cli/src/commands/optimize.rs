use std::io::Read;
use std::path::Path;

use thermo_cooling::{CoolingOptimizer, OptimizeRequest};

pub fn run(rules_path: &str, input: Option<&str>) -> anyhow::Result<()> {
    let optimizer = CoolingOptimizer::load_or_init(Path::new(rules_path))?;

    let raw = match input {
        Some(file) => std::fs::read_to_string(file)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    // An empty request is valid: every field defaults.
    let request: OptimizeRequest = if raw.trim().is_empty() {
        OptimizeRequest::default()
    } else {
        serde_json::from_str(&raw)?
    };

    let plan = optimizer.optimize(&request);
    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
