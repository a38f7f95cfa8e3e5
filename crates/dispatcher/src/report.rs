//! Outcome of a finished dispatch run

use std::time::Duration;

use crate::metrics::MetricsSnapshot;

/// Statistics from a dispatch run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchReport {
    /// Configured passes
    pub passes: usize,

    /// Facts per pass
    pub facts_per_pass: usize,

    /// Facts pushed into the queue
    pub enqueued: u64,

    /// Submissions attempted
    pub attempted: u64,

    /// Submissions answered with 200 OK
    pub succeeded: u64,

    /// Submissions that failed for any reason
    pub failed: u64,

    /// Wall time from first enqueue to consumer exit
    pub duration: Duration,
}

impl DispatchReport {
    pub(crate) fn from_snapshot(
        passes: usize,
        facts_per_pass: usize,
        snapshot: MetricsSnapshot,
        duration: Duration,
    ) -> Self {
        Self {
            passes,
            facts_per_pass,
            enqueued: snapshot.enqueued_count,
            attempted: snapshot.attempted_count(),
            succeeded: snapshot.succeeded_count,
            failed: snapshot.failed_count,
            duration,
        }
    }

    /// True when no submission failed
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }

    /// Failed submissions as a percentage of attempts
    pub fn failure_rate(&self) -> f64 {
        if self.attempted > 0 {
            (self.failed as f64 / self.attempted as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Submissions per second
    pub fn throughput(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.attempted as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }
}
