//! # Contracts
//!
//! Shared interface contracts for the fact loader workspace.
//! Business crates depend on this crate only; reverse dependencies are prohibited.
//!
//! ## Data flow
//! - `generator` turns a [`FactTemplate`] into `Vec<Fact>`
//! - `dispatcher` pushes facts through a bounded queue into a [`FactSubmitter`]
//! - `submitter` provides the HTTP and log-only [`FactSubmitter`] implementations

mod credential;
mod error;
mod fact;
mod plan;
mod submitter;

pub use credential::Credential;
pub use error::*;
pub use fact::{Fact, FORM_FIELD_NAMES};
pub use plan::*;
pub use submitter::*;
