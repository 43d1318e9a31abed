//! Run the entry persister against a batch file without the Lambda runtime.

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use moood_persister::init_logging;
use moood_persister::load_processor;
use moood_persister::protocol::EventBatch;
use serde_json::json;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// CLI options for a local invocation.
#[derive(Parser, Debug)]
#[command(
    name = "moood-persister-local",
    about = "Validate an entry event batch the way the persister function does"
)]
struct Cli {
    /// Batch JSON file, or `-` to read from stdin
    event: PathBuf,
    /// JSON5 config file (defaults to MOOOD_PERSISTER_CONFIG, then built-in defaults)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the full outcome as JSON instead of the summary string
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    info!(
        "starting local invocation (event={}, config_set={})",
        cli.event.display(),
        cli.config.is_some()
    );
    let processor = load_processor(cli.config.as_deref()).context("failed to load config")?;
    let batch = read_batch(&cli.event)?;
    debug!("batch decoded (records={})", batch.len());

    let outcome = processor.process(&batch).context("invocation failed")?;
    if cli.json {
        let skipped: Vec<_> = outcome
            .skipped
            .iter()
            .map(|skip| {
                json!({
                    "key": skip.key,
                    "id": skip.id,
                    "error": skip.error.to_string(),
                })
            })
            .collect();
        let accepted = serde_json::to_value(&outcome.accepted)?;
        let summary = outcome.summary();
        let report = json!({
            "summary": summary.to_string(),
            "received": summary.received(),
            "processed": summary.processed,
            "accepted": accepted,
            "skipped": skipped,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", outcome.summary());
    }
    Ok(())
}

/// Read and decode a batch from a file path or stdin.
fn read_batch(path: &Path) -> Result<EventBatch> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read batch from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read batch file {}", path.display()))?
    };
    serde_json::from_str(&contents).context("failed to decode event batch")
}
