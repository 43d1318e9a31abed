//! Lambda invocation handler.

use lambda_runtime::{Error, LambdaEvent};
use log::{error, info};
use moood_persister_core::BatchProcessor;
use moood_persister_protocol::EventBatch;

/// Validate the invocation batch and return the summary string.
///
/// An empty batch fails the invocation; invalid records only lower the count.
pub async fn function_handler(
    event: LambdaEvent<EventBatch>,
    processor: &BatchProcessor,
) -> Result<String, Error> {
    let (batch, context) = event.into_parts();
    info!(
        "invocation received (request_id={}, records={})",
        context.request_id,
        batch.len()
    );
    match processor.handle(&batch) {
        Ok(summary) => Ok(summary),
        Err(err) => {
            error!(
                "invocation failed (request_id={}): {}",
                context.request_id, err
            );
            Err(err.into())
        }
    }
}
