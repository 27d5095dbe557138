//! Error handling for the resume analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeAnalyzerError {
    /// The only failure `ResumeAnalyzer::analyze` reports to its caller.
    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeAnalyzerError>;

impl From<anyhow::Error> for ResumeAnalyzerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeAnalyzerError::InvalidInput(err.to_string())
    }
}

/// Failure of a single analysis strategy. The orchestrator logs these and
/// moves on to the next strategy; they never reach the caller.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("HTTP error from {provider}: {source}")]
    Http {
        provider: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned status {status}: {body}")]
    Status {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("{0} returned no generated text")]
    EmptyResponse(String),

    #[error("Malformed response envelope from {provider}: {message}")]
    MalformedEnvelope { provider: String, message: String },

    #[error("Response does not match the analysis shape: {0}")]
    Shape(String),

    #[error("Local analysis failed: {0}")]
    Local(String),
}
