pub mod check;
pub mod derive;
pub mod export;
pub mod init;
pub mod kinds;
pub mod slug;
pub mod validate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "content-schemas")]
#[command(version)]
#[command(about = "Content model schemas, slug derivation and document validation", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "schemas.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// List document kinds
    List {
        #[arg(long)]
        schemas: Option<PathBuf>,
    },
    /// Print one document kind
    Show {
        kind: String,
        #[arg(long)]
        schemas: Option<PathBuf>,
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Print or write the whole schema table
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Check a schema table for integrity problems
    Check {
        #[arg(long)]
        schemas: Option<PathBuf>,
    },
    /// Derive a slug from an identifier and a title
    Slug {
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        max_length: Option<usize>,
    },
    /// Apply initial values and fill the slug of a JSON document
    Derive {
        #[arg(short, long)]
        kind: String,
        file: PathBuf,
        #[arg(long)]
        schemas: Option<PathBuf>,
    },
    /// Validate a JSON document against its kind
    Validate {
        #[arg(short, long)]
        kind: String,
        file: PathBuf,
        #[arg(long)]
        schemas: Option<PathBuf>,
    },
}

pub(crate) fn render<T: Serialize>(value: &T, format: &str, pretty: bool) -> Result<String> {
    match format {
        "json" if pretty => serde_json::to_string_pretty(value).context("Failed to render JSON"),
        "json" => serde_json::to_string(value).context("Failed to render JSON"),
        "toml" => toml::to_string_pretty(value).context("Failed to render TOML"),
        other => anyhow::bail!("Unsupported output format '{}'", other),
    }
}

pub(crate) fn read_document(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse document JSON from {}", path.display()))
}
