use std::time::Duration;

use crate::{Company, FinalAnalysisRequest, JobId, ProcessDataRequest, ScrapeRequest};

/// Side effects requested by `update`; the platform executes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    AnalyzeWebsite { url: String },
    ResolveAppIds { companies: Vec<Company> },
    StartScraping { request: ScrapeRequest },
    /// Schedule `Msg::PollDue` now and then every `interval`, replacing any prior schedule.
    StartPolling { job_id: JobId, interval: Duration },
    StopPolling,
    CheckStatus { job_id: JobId },
    ProcessExtractedData { request: ProcessDataRequest },
    SubmitDimensions { request: FinalAnalysisRequest },
}
