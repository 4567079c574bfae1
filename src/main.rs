use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

use actor_films::cli::Cli;
use actor_films::config::Config;
use actor_films::pipeline::{self, Outcome};
use actor_films::scrapers::ImdbScraper;
use actor_films::storage::{JsonStorage, Storage};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Initialize logging; stdout is reserved for the listing
    let filter = EnvFilter::from_default_env().add_directive("actor_films=info".parse()?);
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if config.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let options = cli.run_options();
    info!("Looking up '{}'", options.query);

    let scraper = ImdbScraper::new(&config).context("Failed to create HTTP client")?;
    let storage = JsonStorage::new(&config.output_dir);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let outcome = pipeline::run(
        &scraper,
        Some(&storage as &dyn Storage),
        &options,
        &mut input,
        &mut output,
    )
    .await
    .with_context(|| format!("Failed to list films for '{}'", options.query))?;
    output.flush()?;

    if let Outcome::Listed { actor, movies, .. } = outcome {
        info!("Listed {} movies for {}", movies.len(), actor.name);
    }

    Ok(())
}
