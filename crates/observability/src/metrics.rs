//! Submission metrics
//!
//! Thin wrappers over the `metrics` facade. Without an installed recorder
//! every call is a no-op.

use std::time::Duration;

use contracts::SubmitError;
use metrics::{counter, gauge, histogram};

/// Record the outcome of one submission attempt
///
/// # Example
///
/// ```ignore
/// let started = Instant::now();
/// let result = submitter.submit(&fact, &credential).await;
/// observability::record_submission(result.as_ref().err(), started.elapsed());
/// ```
pub fn record_submission(error: Option<&SubmitError>, latency: Duration) {
    histogram!("fact_loader_submit_latency_ms").record(latency.as_secs_f64() * 1000.0);

    match error {
        None => {
            counter!("fact_loader_submissions_total", "outcome" => "success").increment(1);
        }
        Some(e) => {
            counter!("fact_loader_submissions_total", "outcome" => "failure").increment(1);
            counter!("fact_loader_submission_failures_total", "kind" => e.kind()).increment(1);
            if let SubmitError::UnexpectedStatus { code } = e {
                counter!(
                    "fact_loader_unexpected_status_total",
                    "code" => code.to_string()
                )
                .increment(1);
            }
        }
    }
}

/// Current dispatch queue depth
pub fn record_queue_depth(depth: usize) {
    gauge!("fact_loader_queue_depth").set(depth as f64);
}

/// One full pass pushed into the queue
pub fn record_pass_enqueued(facts: usize) {
    counter!("fact_loader_passes_total").increment(1);
    counter!("fact_loader_facts_enqueued_total").increment(facts as u64);
}
