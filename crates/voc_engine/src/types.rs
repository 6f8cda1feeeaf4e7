use std::fmt;

use serde_json::Value;
use voc_core::{
    Company, FinalAnalysisRequest, JobId, JobStatus, ProcessDataRequest, ScrapeRequest,
    ScrapeStarted,
};

/// One backend request, as queued on the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    AnalyzeWebsite { url: String },
    ResolveAppIds { companies: Vec<Company> },
    StartScraping { request: ScrapeRequest },
    CheckStatus { job_id: JobId },
    SendToWebhook { request: ProcessDataRequest },
    SubmitDimensions { request: FinalAnalysisRequest },
}

impl ApiCall {
    pub fn operation(&self) -> &'static str {
        match self {
            ApiCall::AnalyzeWebsite { .. } => "analyzeWebsite",
            ApiCall::ResolveAppIds { .. } => "resolveAppIds",
            ApiCall::StartScraping { .. } => "startScraping",
            ApiCall::CheckStatus { .. } => "checkStatus",
            ApiCall::SendToWebhook { .. } => "sendToWebhook",
            ApiCall::SubmitDimensions { .. } => "submitDimensions",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    WebsiteAnalyzed(Result<Vec<Company>, ApiError>),
    AppIdsResolved(Result<Vec<Company>, ApiError>),
    ScrapingStarted {
        job_id: JobId,
        result: Result<ScrapeStarted, ApiError>,
    },
    StatusChecked {
        job_id: JobId,
        result: Result<JobStatus, ApiError>,
    },
    WebhookResponded(Result<Value, ApiError>),
    DimensionsSubmitted(Result<Value, ApiError>),
    /// The poll timer fired for `job_id`.
    PollDue { job_id: JobId },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "unexpected response body"),
        }
    }
}
