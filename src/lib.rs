pub mod cli;
pub mod config;
pub mod models;
pub mod schemas;
pub mod services;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use schemas::{find_kind, schema_types, SchemaError, SchemaTable};
pub use services::slug::{derive_slug, slugify, Identifier};
