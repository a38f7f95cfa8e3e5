//! LogSubmitter - logs facts via tracing instead of sending them

use contracts::{Credential, Fact, FactSubmitter, SubmitError};
use tracing::{info, instrument};

/// Submitter for dry runs; every fact is accepted
pub struct LogSubmitter {
    name: String,
}

impl LogSubmitter {
    /// Create a new LogSubmitter with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FactSubmitter for LogSubmitter {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(
        name = "log_submitter_submit",
        skip(self, fact, _credential),
        fields(submitter = %self.name, value = fact.value)
    )]
    async fn submit(&self, fact: &Fact, _credential: &Credential) -> Result<(), SubmitError> {
        info!(
            submitter = %self.name,
            indicator_to_mo_id = fact.indicator_to_mo_id,
            value = fact.value,
            comment = %fact.comment,
            "Dry run, fact not sent"
        );
        Ok(())
    }
}
