//! Error types for CLI operations.

use std::path::PathBuf;

use thiserror::Error;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration file not found
    #[error("Configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// No bearer token from any source
    #[error("No bearer token: pass --token, set FACT_LOADER_TOKEN or api.token")]
    MissingToken,

    /// Dispatch pipeline did not complete
    #[error("Dispatch failed: {0}")]
    Dispatch(#[from] dispatcher::DispatcherError),

    /// Some submissions failed and the caller asked to fail on error
    #[error("{failed} of {attempted} submissions failed")]
    SubmissionsFailed { failed: u64, attempted: u64 },
}

impl CliError {
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = CliError::SubmissionsFailed {
            failed: 3,
            attempted: 10,
        };
        assert_eq!(err.to_string(), "3 of 10 submissions failed");

        let err = CliError::config_not_found("missing.toml");
        assert!(err.to_string().contains("missing.toml"));
    }
}
