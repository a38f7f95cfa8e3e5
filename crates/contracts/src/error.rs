//! Layered error definitions
//!
//! Categorized by source: config / submission

use thiserror::Error;

/// Configuration and IO errors shared by the loader crates
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContractError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Outcome of a single failed submission
///
/// Every variant is fatal to one submission only; the dispatcher logs it and
/// moves on to the next fact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The request could not be constructed (malformed endpoint, bad header)
    #[error("error creating request: {message}")]
    RequestBuild { message: String },

    /// The multipart body could not be encoded
    #[error("error encoding form data: {message}")]
    Encoding { message: String },

    /// The server could not be reached
    #[error("error sending request: {message}")]
    Transport { message: String },

    /// The server answered with something other than 200 OK
    #[error("server returned status code: {code}")]
    UnexpectedStatus { code: u16 },
}

impl SubmitError {
    pub fn request_build(message: impl Into<String>) -> Self {
        Self::RequestBuild {
            message: message.into(),
        }
    }

    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Short label for metrics and log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RequestBuild { .. } => "request_build",
            Self::Encoding { .. } => "encoding",
            Self::Transport { .. } => "transport",
            Self::UnexpectedStatus { .. } => "unexpected_status",
        }
    }
}
