//! Error types for Kairos GUI
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input (form validation)
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// HTTP transport error while talking to the lead endpoint
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// Lead endpoint refused the submission
    #[snafu(display("Lead rejected: {message}"))]
    Rejected { message: String },
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Http { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
