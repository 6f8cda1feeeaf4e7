use serde_json::Value;

use crate::{
    ApiFailure, Company, CompanyField, DimensionField, JobId, JobStatus, ScrapeStarted, StoreField,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the website URL field.
    WebsiteInputChanged(String),
    /// User submitted the website step.
    WebsiteSubmitted,
    /// Backend answered `analyzeWebsite`.
    WebsiteAnalyzed(Result<Vec<Company>, ApiFailure>),

    /// User appended a placeholder competitor row.
    CompetitorAdded,
    /// User removed a competitor row.
    CompetitorRemoved { index: usize },
    /// User edited a competitor's name or website.
    CompetitorEdited {
        index: usize,
        field: CompanyField,
        value: String,
    },
    /// User confirmed the competitor list.
    CompetitorsSubmitted,
    /// Backend answered `resolveAppIds`.
    AppIdsResolved(Result<Vec<Company>, ApiFailure>),

    /// User edited a store identifier.
    AppIdEdited {
        index: usize,
        field: StoreField,
        value: String,
    },
    /// User started scraping; the platform supplies a freshly generated id.
    ScrapingRequested { job_id: JobId },
    /// Backend answered `startScraping`.
    ScrapingStarted {
        job_id: JobId,
        result: Result<ScrapeStarted, ApiFailure>,
    },

    /// Poll timer fired.
    PollDue { job_id: JobId },
    /// Backend answered `checkStatus`.
    StatusReceived {
        job_id: JobId,
        result: Result<JobStatus, ApiFailure>,
    },
    /// User clicked "Process Extracted Data".
    ProcessDataClicked,
    /// Backend answered the data-processing webhook.
    WebhookResponded(Result<Value, ApiFailure>),
    /// User edited a generated dimension.
    DimensionEdited {
        index: usize,
        field: DimensionField,
        value: String,
    },
    /// User submitted the dimension form.
    DimensionsSubmitted,
    /// Backend answered `submitDimensions`.
    DimensionsAccepted(Result<Value, ApiFailure>),
    /// User asked to start over from a terminal view.
    ResetClicked,

    /// Fallback for placeholder wiring.
    NoOp,
}
