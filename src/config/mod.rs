use crate::services::validation::ValidationOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub slug: SlugConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlugConfig {
    /// Length bound for slugs derived from the command line.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub reject_unknown_fields: bool,
}

impl From<&ValidationConfig> for ValidationOptions {
    fn from(config: &ValidationConfig) -> Self {
        Self {
            reject_unknown_fields: config.reject_unknown_fields,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            pretty: true,
        }
    }
}

impl OutputConfig {
    pub const FORMATS: [&'static str; 2] = ["json", "toml"];

    pub fn validate(&self) -> Result<()> {
        if !Self::FORMATS.contains(&self.format.as_str()) {
            anyhow::bail!(
                "Invalid output format '{}'. Available formats: {}",
                self.format,
                Self::FORMATS.join(", ")
            );
        }
        Ok(())
    }
}

fn default_max_length() -> usize {
    crate::services::slug::DEFAULT_SLUG_MAX_LENGTH
}

fn default_format() -> String {
    "json".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.slug.max_length == 0 {
            anyhow::bail!("slug.max_length must be greater than 0");
        }
        if self.slug.max_length > 2048 {
            anyhow::bail!("slug.max_length must be 2048 or less");
        }
        self.output.validate()?;
        Ok(())
    }
}
