use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wikidata_enricher::{config::DEFAULT_API_URL, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "enrich-from-wikidata",
    version,
    about = "Fill in missing game stub fields from Wikidata",
    long_about = None
)]
struct Cli {
    /// Stub JSON file to read
    input: PathBuf,

    /// File to write the enriched stub to
    output: PathBuf,

    /// Wikidata action API endpoint
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn setup_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("wikidata_enricher=debug,enrich_from_wikidata=debug,info")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

#[cfg(not(tarpaulin_include))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => anyhow::bail!("{e}"),
    };
    setup_tracing(cli.verbose);

    let stub = Stub::from_path(&cli.input)
        .with_context(|| format!("Error reading input file {}", cli.input.display()))?;

    let api = WikidataApi::builder(cli.api_url)?.build();
    let enriched = enrich_stub(api, &stub).await;

    enriched
        .write_to_path(&cli.output)
        .with_context(|| format!("Error writing output file {}", cli.output.display()))?;
    tracing::info!("Enriched stub written to {}", cli.output.display());
    Ok(())
}
