//! # Dispatcher
//!
//! Fact dispatch pipeline.
//!
//! Responsibilities:
//! - Own the bounded fact queue
//! - Run a single consumer task that submits facts in FIFO order
//! - Refeed the full fact set for the configured number of passes
//! - Close the queue once, wait for the consumer, report the outcome
//!
//! Submission failures are logged and counted; they never stop the run.

pub mod dispatcher;
pub mod error;
pub mod metrics;
pub mod report;
pub mod worker;

pub use contracts::{Credential, Fact, FactSubmitter, SubmitError};
pub use dispatcher::{dispatch, DispatchState, Dispatcher, DispatcherConfig};
pub use error::DispatcherError;
pub use metrics::{DispatchMetrics, MetricsSnapshot};
pub use report::DispatchReport;
