//! Submit worker - the single consumer of the dispatch queue

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};

use contracts::{Credential, Fact, FactSubmitter};

use crate::metrics::DispatchMetrics;

/// Spawn the consumer task
///
/// The task ends once every sender is dropped and the queue is empty.
pub fn spawn<S: FactSubmitter + Send + 'static>(
    submitter: S,
    credential: Credential,
    rx: mpsc::Receiver<Fact>,
    metrics: Arc<DispatchMetrics>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        submit_worker(submitter, credential, rx, metrics).await;
    })
}

/// Worker loop that drains the queue into the submitter
#[instrument(
    name = "submit_worker_loop",
    skip(submitter, credential, rx, metrics),
    fields(submitter = %submitter.name())
)]
async fn submit_worker<S: FactSubmitter>(
    submitter: S,
    credential: Credential,
    mut rx: mpsc::Receiver<Fact>,
    metrics: Arc<DispatchMetrics>,
) {
    let name = submitter.name().to_string();
    debug!(submitter = %name, "Submit worker started");

    while let Some(fact) = rx.recv().await {
        metrics.set_queue_len(rx.len());
        observability::record_queue_depth(rx.len());

        let started = Instant::now();
        let result = submitter.submit(&fact, &credential).await;
        observability::record_submission(result.as_ref().err(), started.elapsed());

        match result {
            Ok(()) => {
                metrics.inc_succeeded_count();
                info!(submitter = %name, fact = %fact, "Fact saved");
            }
            Err(e) => {
                metrics.inc_failed_count();
                error!(
                    submitter = %name,
                    kind = e.kind(),
                    error = %e,
                    fact = %fact,
                    "Error saving fact"
                );
                // Continue processing - don't stop on a single failure
            }
        }

        let attempted = metrics.attempted_count();
        if attempted.is_multiple_of(1000) {
            debug!(
                attempted,
                failed = metrics.failed_count(),
                "Submit worker progress"
            );
        }
    }

    debug!(
        submitter = %name,
        attempted = metrics.attempted_count(),
        "Submit worker stopped"
    );
}
