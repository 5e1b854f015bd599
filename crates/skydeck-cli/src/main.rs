mod cli;
mod commands;
mod error;

use clap::Parser;
use skydeck_core::config::AppConfig;
use skydeck_tokens::DesignTokens;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // Logs go to stderr so stdout stays parseable JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.general.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.config.clone().or_else(AppConfig::source) {
        Some(path) => tracing::info!(path = %path.display(), "Loaded config"),
        None => tracing::debug!(
            path = %AppConfig::config_path().display(),
            "No user config, using defaults"
        ),
    }

    if let Some(path) = commands::token_file(&cli.command, cli.tokens.as_deref(), &config) {
        skydeck_tokens::install(DesignTokens::from_file(path)?)?;
    }

    let output = commands::run(&cli.command, &config, cli.compact)?;
    println!("{output}");
    Ok(())
}
