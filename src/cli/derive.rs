use crate::schemas::SchemaTable;
use crate::services::document::{apply_initial_values, fill_slug};
use anyhow::Result;
use std::path::Path;

pub fn run(kind: &str, file: &Path, schemas: Option<&Path>) -> Result<()> {
    let table = SchemaTable::load_or_builtin(schemas)?;
    let kind = table.find(kind)?;
    let mut doc = super::read_document(file)?;

    if !doc.is_object() {
        anyhow::bail!("{} does not contain a JSON object", file.display());
    }

    apply_initial_values(kind, &mut doc, chrono::Utc::now());
    if fill_slug(kind, &mut doc).is_none() {
        tracing::info!("Kind '{}' has no slug field", kind.name);
    }

    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
