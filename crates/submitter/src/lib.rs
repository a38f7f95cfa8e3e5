//! # Submitter
//!
//! `FactSubmitter` implementations.
//!
//! - [`HttpSubmitter`]: multipart POST to the reporting API
//! - [`LogSubmitter`]: logs facts without network I/O (dry runs)

mod http;
mod log;

pub use contracts::{Credential, Fact, FactSubmitter, SubmitError};
pub use self::http::HttpSubmitter;
pub use self::log::LogSubmitter;
