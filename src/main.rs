use clap::Parser;
use content_schemas::cli::{Cli, Commands};
use content_schemas::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "content_schemas=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path }) => {
            content_schemas::cli::init::run(&path)?;
        }
        Some(Commands::List { schemas }) => {
            content_schemas::cli::kinds::list(schemas.as_deref())?;
        }
        Some(Commands::Show {
            kind,
            schemas,
            format,
        }) => {
            let config = Config::load(&cli.config)?;
            content_schemas::cli::kinds::show(&config, &kind, schemas.as_deref(), format.as_deref())?;
        }
        Some(Commands::Export { output, format }) => {
            let config = Config::load(&cli.config)?;
            content_schemas::cli::export::run(&config, output.as_deref(), format.as_deref())?;
        }
        Some(Commands::Check { schemas }) => {
            content_schemas::cli::check::run(schemas.as_deref())?;
        }
        Some(Commands::Slug {
            id,
            title,
            max_length,
        }) => {
            let config = Config::load(&cli.config)?;
            content_schemas::cli::slug::run(&config, id, title, max_length)?;
        }
        Some(Commands::Derive {
            kind,
            file,
            schemas,
        }) => {
            content_schemas::cli::derive::run(&kind, &file, schemas.as_deref())?;
        }
        Some(Commands::Validate {
            kind,
            file,
            schemas,
        }) => {
            let config = Config::load(&cli.config)?;
            content_schemas::cli::validate::run(&config, &kind, &file, schemas.as_deref())?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
