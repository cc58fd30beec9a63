use crate::schemas::SchemaTable;
use crate::services::validation::{validate_document, ValidationOptions};
use crate::Config;
use anyhow::Result;
use std::path::Path;

pub fn run(config: &Config, kind: &str, file: &Path, schemas: Option<&Path>) -> Result<()> {
    let table = SchemaTable::load_or_builtin(schemas)?;
    let kind = table.find(kind)?;
    let doc = super::read_document(file)?;

    let options = ValidationOptions::from(&config.validation);
    let issues = validate_document(kind, &doc, &options, None);

    if issues.is_empty() {
        println!("{} is a valid {} document", file.display(), kind.name);
        return Ok(());
    }

    for issue in &issues {
        println!("  {}", issue);
    }
    tracing::warn!("{} failed validation with {} issue(s)", file.display(), issues.len());
    std::process::exit(1);
}
