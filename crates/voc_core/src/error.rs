use std::fmt;

/// Failure of a backend call as seen by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    /// Transport failed before a response arrived (connect, timeout, ...).
    Network(String),
    /// The backend answered with a non-2xx status.
    Server { status: u16, message: String },
    /// The response body did not have the expected shape.
    Decode(String),
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::Network(message) => write!(f, "network error: {message}"),
            ApiFailure::Server { status, message } => write!(f, "http status {status}: {message}"),
            ApiFailure::Decode(message) => write!(f, "unexpected response: {message}"),
        }
    }
}

/// The single inline message a step shows. `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("Please enter a valid URL (e.g., https://example.com)")]
    InvalidUrl,
    #[error("Please add at least one company.")]
    EmptyCompetitorList,
    #[error("Failed to analyze website. Please check the URL and try again.")]
    AnalyzeFailed,
    #[error("Failed to resolve App IDs. Please try again.")]
    ResolveFailed,
    #[error("Failed to start scraping job. Check backend connection.")]
    ScrapeStartFailed,
    #[error("Failed to process data.")]
    ProcessDataFailed,
    #[error("Submission failed")]
    SubmitDimensionsFailed,
}

/// Why a job ended in the failed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobFailure {
    Reported { message: String },
    TimedOut { attempts: u32 },
}
