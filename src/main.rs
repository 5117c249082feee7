use anyhow::Context;
use clap::Parser;
use dm_lookup::config::credentials;
use dm_lookup::utils::{logger, validation::Validate};
use dm_lookup::{read_domain_lines, AnymailfinderClient, BatchRunner, CliConfig, CsvSink};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting dm-lookup");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    config
        .validate()
        .context("Configuration validation failed")?;

    // Fatal startup conditions: credential, input file, output file. Anything
    // after this point is recovered per-domain and never aborts the batch.
    let api_key = credentials::resolve_api_key()?;
    let lines = read_domain_lines(&config.input_file)?;
    let sink = CsvSink::create(&config.output_file)
        .with_context(|| format!("Cannot create output file '{}'", config.output_file))?;

    tracing::info!(
        "Read {} lines from {}, searching category '{}'",
        lines.len(),
        config.input_file,
        config.category
    );

    let timeout = Duration::from_secs(config.timeout_seconds);
    let api = AnymailfinderClient::new(&config.api_endpoint, api_key, &config.category, timeout);

    let mut runner = BatchRunner::new(api, sink, &config.category, timeout);
    let summary = runner.run(lines).await?;

    tracing::info!(
        "Run finished: {} domains, {} successes, {} failures",
        summary.total,
        summary.successes,
        summary.failures
    );
    println!(
        "Done: {} domains processed ({} found, {} failed). Results saved to {}",
        summary.total, summary.successes, summary.failures, config.output_file
    );

    Ok(())
}
