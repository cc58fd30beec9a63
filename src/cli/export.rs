use crate::schemas::SchemaTable;
use crate::Config;
use anyhow::{Context, Result};
use std::path::Path;

pub fn run(config: &Config, output: Option<&Path>, format: Option<&str>) -> Result<()> {
    let table = SchemaTable::builtin();
    let format = format.unwrap_or(&config.output.format);
    let rendered = match format {
        "json" => table.to_json(config.output.pretty)?,
        "toml" => table.to_toml()?,
        other => anyhow::bail!("Unsupported output format '{}'", other),
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write schema table to {}", path.display()))?;
            tracing::info!(
                "Exported {} document kinds to {}",
                table.types.len(),
                path.display()
            );
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
