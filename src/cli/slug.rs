use crate::services::slug::{compose_source, slugify, Identifier};
use crate::Config;
use anyhow::Result;

/// The slug for command-line input. The id is taken as text so its written
/// form (`007`, `+5`) is kept.
pub fn derive(config: &Config, id: Option<String>, title: Option<&str>, max_length: Option<usize>) -> String {
    let identifier = id.map(Identifier::Text);
    let source = compose_source(identifier.as_ref(), title);
    slugify(&source, max_length.unwrap_or(config.slug.max_length))
}

pub fn run(config: &Config, id: Option<String>, title: Option<String>, max_length: Option<usize>) -> Result<()> {
    let slug = derive(config, id, title.as_deref(), max_length);

    if slug.is_empty() {
        tracing::warn!("Derived slug is empty; a document would be rejected with it");
    }
    println!("{}", slug);
    Ok(())
}
