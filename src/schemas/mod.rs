pub mod articles;
mod check;
pub mod news;
pub mod options;
pub mod podcast;
pub mod research_topics;
mod shared;

pub use check::TableProblem;

use crate::models::DocumentKind;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("unknown document kind '{name}'. Available kinds: {available}")]
    UnknownKind { name: String, available: String },
    #[error("unsupported schema table format '{0}' (expected json or toml)")]
    UnsupportedFormat(String),
}

static SCHEMA_TYPES: Lazy<Vec<DocumentKind>> = Lazy::new(|| {
    vec![
        articles::articles(),
        research_topics::research_topics(),
        news::news(),
        podcast::podcast(),
    ]
});

/// Built-in document kinds in registration order.
pub fn schema_types() -> &'static [DocumentKind] {
    &SCHEMA_TYPES
}

pub fn find_kind(name: &str) -> Result<&'static DocumentKind, SchemaError> {
    lookup(schema_types(), name)
}

fn lookup<'a>(types: &'a [DocumentKind], name: &str) -> Result<&'a DocumentKind, SchemaError> {
    types
        .iter()
        .find(|k| k.name == name)
        .ok_or_else(|| SchemaError::UnknownKind {
            name: name.to_string(),
            available: types
                .iter()
                .map(|k| k.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// A complete kind -> fields -> constraints table, as exchanged with a host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaTable {
    pub types: Vec<DocumentKind>,
}

impl SchemaTable {
    pub fn builtin() -> Self {
        Self {
            types: schema_types().to_vec(),
        }
    }

    /// Loads a table from a `.json` or `.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema table from {}", path.display()))?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();

        let table: SchemaTable = match extension.as_str() {
            "json" => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse schema table from {}", path.display()))?,
            "toml" => toml::from_str(&content)
                .with_context(|| format!("Failed to parse schema table from {}", path.display()))?,
            other => return Err(SchemaError::UnsupportedFormat(other.to_string()).into()),
        };

        tracing::debug!(
            "Loaded {} document kinds from {}",
            table.types.len(),
            path.display()
        );
        Ok(table)
    }

    /// The table at `path`, or the built-in one when no path is given.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::builtin()),
        }
    }

    pub fn find(&self, name: &str) -> Result<&DocumentKind, SchemaError> {
        lookup(&self.types, name)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let out = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        out.context("Failed to serialize schema table as JSON")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize schema table as TOML")
    }

    /// Integrity problems in the table; empty when the table is sound.
    pub fn check(&self) -> Vec<TableProblem> {
        check::check_table(&self.types)
    }
}
