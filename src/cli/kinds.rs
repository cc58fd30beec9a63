use crate::schemas::SchemaTable;
use crate::Config;
use anyhow::Result;
use std::path::Path;

pub fn list(schemas: Option<&Path>) -> Result<()> {
    let table = SchemaTable::load_or_builtin(schemas)?;
    let width = table.types.iter().map(|k| k.name.len()).max().unwrap_or(0);
    for kind in &table.types {
        println!(
            "{:width$}  {}  ({} fields)",
            kind.name,
            kind.title,
            kind.fields.len(),
            width = width
        );
    }
    Ok(())
}

pub fn show(config: &Config, kind: &str, schemas: Option<&Path>, format: Option<&str>) -> Result<()> {
    let table = SchemaTable::load_or_builtin(schemas)?;
    let kind = table.find(kind)?;
    let format = format.unwrap_or(&config.output.format);
    println!("{}", super::render(kind, format, config.output.pretty)?);
    Ok(())
}
