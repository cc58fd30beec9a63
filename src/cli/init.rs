use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"[slug]
max_length = 200

[validation]
reject_unknown_fields = false

[output]
format = "json"
pretty = true
"#;

pub fn run(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;

    let config_path = path.join("schemas.toml");
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }
    std::fs::write(&config_path, DEFAULT_CONFIG)?;

    tracing::info!("Created {}", config_path.display());
    Ok(())
}
