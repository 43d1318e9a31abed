use anyhow::{Context, anyhow};
use lambda_runtime::{run, service_fn};
use log::info;
use moood_persister::{function_handler, init_logging, load_processor};

/// Lambda entry point for the entry persister.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let processor = load_processor(None).context("failed to load persister config")?;
    info!("starting lambda runtime");
    run(service_fn(|event| function_handler(event, &processor)))
        .await
        .map_err(|err| anyhow!(err))
}
