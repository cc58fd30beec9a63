use crate::schemas::SchemaTable;
use anyhow::Result;
use std::path::Path;

pub fn run(schemas: Option<&Path>) -> Result<()> {
    let table = SchemaTable::load_or_builtin(schemas)?;
    let problems = table.check();

    if problems.is_empty() {
        println!("{} document kinds, no problems found", table.types.len());
        return Ok(());
    }

    for problem in &problems {
        println!("  {}", problem);
    }
    tracing::warn!("Schema table has {} problem(s)", problems.len());
    std::process::exit(1);
}
