//! Dispatch metrics for observability

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Live counters for one dispatch run
#[derive(Debug, Default)]
pub struct DispatchMetrics {
    /// Current queue length
    queue_len: AtomicUsize,
    /// Facts pushed into the queue
    enqueued_count: AtomicU64,
    /// Completed enqueue passes
    passes_completed: AtomicU64,
    /// Successful submissions
    succeeded_count: AtomicU64,
    /// Failed submissions
    failed_count: AtomicU64,
}

impl DispatchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_len(&self) -> usize {
        self.queue_len.load(Ordering::Relaxed)
    }

    pub fn set_queue_len(&self, len: usize) {
        self.queue_len.store(len, Ordering::Relaxed);
    }

    pub fn enqueued_count(&self) -> u64 {
        self.enqueued_count.load(Ordering::Relaxed)
    }

    pub fn inc_enqueued_count(&self) {
        self.enqueued_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn passes_completed(&self) -> u64 {
        self.passes_completed.load(Ordering::Relaxed)
    }

    pub fn inc_passes_completed(&self) {
        self.passes_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn succeeded_count(&self) -> u64 {
        self.succeeded_count.load(Ordering::Relaxed)
    }

    pub fn inc_succeeded_count(&self) {
        self.succeeded_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn failed_count(&self) -> u64 {
        self.failed_count.load(Ordering::Relaxed)
    }

    pub fn inc_failed_count(&self) {
        self.failed_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Submissions attempted so far
    pub fn attempted_count(&self) -> u64 {
        self.succeeded_count() + self.failed_count()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            queue_len: self.queue_len(),
            enqueued_count: self.enqueued_count(),
            passes_completed: self.passes_completed(),
            succeeded_count: self.succeeded_count(),
            failed_count: self.failed_count(),
        }
    }
}

/// Snapshot of dispatch metrics (for reporting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub queue_len: usize,
    pub enqueued_count: u64,
    pub passes_completed: u64,
    pub succeeded_count: u64,
    pub failed_count: u64,
}

impl MetricsSnapshot {
    pub fn attempted_count(&self) -> u64 {
        self.succeeded_count + self.failed_count
    }
}
