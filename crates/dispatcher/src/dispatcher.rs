//! Dispatcher - drives enqueue passes and waits for the submit worker

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument};

use contracts::{Credential, DispatchSettings, Fact, FactSubmitter};

use crate::error::DispatcherError;
use crate::metrics::DispatchMetrics;
use crate::report::DispatchReport;
use crate::worker;

/// Lifecycle of one dispatch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    /// Not started
    #[default]
    Idle,
    /// Passes are being pushed into the queue
    Enqueuing,
    /// Queue closed, worker draining what is left
    Draining,
    /// Worker exited
    Done,
}

/// Dispatcher configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Full passes over the fact set
    pub passes: usize,

    /// Queue capacity (None = one full fact set)
    pub queue_capacity: Option<usize>,
}

impl DispatcherConfig {
    pub fn with_passes(passes: usize) -> Self {
        Self {
            passes,
            queue_capacity: None,
        }
    }

    /// Queue capacity for a fact set of `set_len`
    ///
    /// tokio channels need a capacity of at least 1.
    pub fn capacity_for(&self, set_len: usize) -> usize {
        self.queue_capacity.unwrap_or(set_len).max(1)
    }
}

impl From<DispatchSettings> for DispatcherConfig {
    fn from(settings: DispatchSettings) -> Self {
        Self {
            passes: settings.passes,
            queue_capacity: settings.queue_capacity,
        }
    }
}

/// Single-producer, single-consumer dispatch pipeline
pub struct Dispatcher<S> {
    submitter: S,
    credential: Credential,
    config: DispatcherConfig,
    metrics: Arc<DispatchMetrics>,
    state_tx: watch::Sender<DispatchState>,
}

impl<S: FactSubmitter + Send + 'static> Dispatcher<S> {
    pub fn new(submitter: S, credential: Credential, config: DispatcherConfig) -> Self {
        let (state_tx, _) = watch::channel(DispatchState::Idle);
        Self {
            submitter,
            credential,
            config,
            metrics: Arc::new(DispatchMetrics::new()),
            state_tx,
        }
    }

    /// Observe state transitions
    pub fn state(&self) -> watch::Receiver<DispatchState> {
        self.state_tx.subscribe()
    }

    /// Live counters, usable while `run` is in progress
    pub fn metrics(&self) -> Arc<DispatchMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Run every pass and wait for the worker to finish
    ///
    /// The worker is spawned before the first enqueue, so submission overlaps
    /// with later passes. The queue is closed exactly once, after the last
    /// pass, by dropping the only sender.
    ///
    /// # Errors
    /// - `WorkerPanicked` if the submit worker panicked
    /// - `QueueClosed` if the worker exited before all passes were enqueued
    #[instrument(
        name = "dispatcher_run",
        skip(self, facts),
        fields(
            submitter = %self.submitter.name(),
            facts = facts.len(),
            passes = self.config.passes
        )
    )]
    pub async fn run(self, facts: &[Fact]) -> Result<DispatchReport, DispatcherError> {
        let Self {
            submitter,
            credential,
            config,
            metrics,
            state_tx,
        } = self;

        let started = Instant::now();
        let capacity = config.capacity_for(facts.len());
        let (tx, rx) = mpsc::channel(capacity);

        info!(
            submitter = %submitter.name(),
            facts = facts.len(),
            passes = config.passes,
            capacity,
            "Dispatcher started"
        );

        let worker_handle = worker::spawn(submitter, credential, rx, Arc::clone(&metrics));

        state_tx.send_replace(DispatchState::Enqueuing);
        let enqueued = enqueue_passes(&tx, facts, config.passes, &metrics).await;

        // Close the queue: this is the only sender
        drop(tx);
        state_tx.send_replace(DispatchState::Draining);
        debug!(
            enqueued = metrics.enqueued_count(),
            "Dispatch queue closed, waiting for worker"
        );

        let joined = worker_handle.await;
        state_tx.send_replace(DispatchState::Done);

        joined?;
        enqueued?;

        let report = DispatchReport::from_snapshot(
            config.passes,
            facts.len(),
            metrics.snapshot(),
            started.elapsed(),
        );

        info!(
            attempted = report.attempted,
            succeeded = report.succeeded,
            failed = report.failed,
            duration_secs = report.duration.as_secs_f64(),
            "Dispatcher finished"
        );

        Ok(report)
    }
}

/// Push the whole fact set into the queue `passes` times, in order
async fn enqueue_passes(
    tx: &mpsc::Sender<Fact>,
    facts: &[Fact],
    passes: usize,
    metrics: &DispatchMetrics,
) -> Result<(), DispatcherError> {
    for pass in 1..=passes {
        for fact in facts {
            tx.send(fact.clone())
                .await
                .map_err(|_| DispatcherError::QueueClosed)?;
            metrics.inc_enqueued_count();
        }
        metrics.inc_passes_completed();
        observability::record_pass_enqueued(facts.len());
        debug!(pass, facts = facts.len(), "Pass enqueued");
    }
    Ok(())
}

/// Convenience function: dispatch `facts` for `passes` passes with default capacity
pub async fn dispatch<S: FactSubmitter + Send + 'static>(
    submitter: S,
    credential: Credential,
    facts: &[Fact],
    passes: usize,
) -> Result<DispatchReport, DispatcherError> {
    Dispatcher::new(submitter, credential, DispatcherConfig::with_passes(passes))
        .run(facts)
        .await
}
