use anyhow::Result;
use quickstart_database::initialize_database;
use quickstart_samples::{database_config, run_samples, select_samples, SampleContext};
use quickstart_utils::{init_logging, AppConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration ({}), using defaults", e);
        AppConfig::default()
    });

    init_logging(&config.logging)?;

    let arg = std::env::args().nth(1);
    let samples = select_samples(arg.as_deref(), &config.samples)?;
    info!(count = samples.len(), "Starting quick start samples");

    let client = initialize_database(&database_config(&config.mongodb)).await?;

    let ctx = SampleContext::new(client, config);
    run_samples(&ctx, &samples).await?;

    info!("All samples completed");
    Ok(())
}
