//! Wizard core: pure state machine, data model and view-model helpers.
mod dimensions;
mod effect;
mod error;
mod job_id;
mod model;
mod msg;
mod polling;
mod results;
mod state;
mod steps;
mod update;
mod view_model;
mod wizard;

pub use dimensions::{decode_dimensions, join_keywords, parse_keywords, resolve_payload, WebhookShape};
pub use effect::Effect;
pub use error::{ApiFailure, JobFailure, WizardError};
pub use job_id::{JobId, JOB_NONCE_LIMIT};
pub use model::{
    is_truthy, Company, CompanyField, Dimension, DimensionField, FinalAnalysisRequest, JobState,
    JobStatus, ProcessDataRequest, ScrapeRequest, ScrapeStarted, StoreField, FALLBACK_BUCKET,
    FALLBACK_FILE_KEY,
};
pub use msg::Msg;
pub use polling::{PollPolicy, PollProgress, DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL};
pub use results::{CompletedJob, DimensionRow, ResultPhase, ResultView};
pub use state::{ActiveStep, AppState};
pub use steps::{AppIdsStep, CompetitorsStep, WebsiteStep};
pub use update::update;
pub use view_model::{
    AppIdRowView, AppIdsView, AppViewModel, CompetitorRowView, CompetitorsView, CompletedView,
    DimensionRowView, ResultsView, StepBody, StepMarker, StepperHeader, WebsiteView, STEP_LABELS,
};
pub use wizard::WizardState;
