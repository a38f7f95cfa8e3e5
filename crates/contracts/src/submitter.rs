//! FactSubmitter trait - Dispatcher output interface
//!
//! Defines the abstract interface for submitters.

use crate::{Credential, Fact, SubmitError};

/// Submission trait
///
/// All submitter implementations must implement this trait.
#[trait_variant::make(FactSubmitter: Send)]
pub trait LocalFactSubmitter {
    /// Submitter name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Submit one fact
    ///
    /// # Errors
    /// Returns the classified submission failure
    async fn submit(&self, fact: &Fact, credential: &Credential) -> Result<(), SubmitError>;
}
