//! Result/polling component mounted at step 4.
//!
//! `Polling` observes the job until it completes or fails. `Completed` hosts the
//! "process extracted data" action, the dimension form and, once the form is
//! accepted, the final-success view. Both `Failed` and final success are
//! terminal and only offer a reset.

use serde_json::Value;
use voc_logging::{voc_debug, voc_info, voc_warn};

use crate::dimensions::{decode_dimensions, join_keywords, parse_keywords};
use crate::polling::{PollVerdict, TickAction};
use crate::{
    ApiFailure, Dimension, DimensionField, Effect, FinalAnalysisRequest, JobFailure, JobId,
    JobStatus, PollPolicy, PollProgress, ProcessDataRequest, WizardError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultPhase {
    Polling(PollProgress),
    Completed(CompletedJob),
    Failed(JobFailure),
}

/// A dimension plus the raw keyword text being edited for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionRow {
    dimension: Dimension,
    keywords_input: String,
}

impl DimensionRow {
    fn new(dimension: Dimension) -> Self {
        let keywords_input = join_keywords(&dimension.keywords);
        Self {
            dimension,
            keywords_input,
        }
    }

    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    pub fn keywords_input(&self) -> &str {
        &self.keywords_input
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedJob {
    status: JobStatus,
    dimensions: Vec<DimensionRow>,
    busy: bool,
    error: Option<WizardError>,
    final_success: bool,
}

impl CompletedJob {
    fn new(status: JobStatus) -> Self {
        Self {
            status,
            dimensions: Vec::new(),
            busy: false,
            error: None,
            final_success: false,
        }
    }

    pub fn status(&self) -> &JobStatus {
        &self.status
    }

    pub fn dimensions(&self) -> &[DimensionRow] {
        &self.dimensions
    }

    pub fn busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&WizardError> {
        self.error.as_ref()
    }

    pub fn final_success(&self) -> bool {
        self.final_success
    }

    /// The process action is offered until some dimensions exist.
    pub fn can_process(&self) -> bool {
        self.dimensions.is_empty() && !self.final_success
    }

    fn edited_dimensions(&self) -> Vec<Dimension> {
        self.dimensions
            .iter()
            .map(|row| row.dimension.clone())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    job_id: JobId,
    policy: PollPolicy,
    phase: ResultPhase,
}

impl ResultView {
    /// Mounts the component in `Polling`; the returned effect starts the timer.
    pub(crate) fn start(job_id: JobId, policy: PollPolicy) -> (Self, Vec<Effect>) {
        voc_info!("Polling job {} every {:?}", job_id, policy.interval);
        let effects = vec![Effect::StartPolling {
            job_id: job_id.clone(),
            interval: policy.interval,
        }];
        let view = Self {
            job_id,
            policy,
            phase: ResultPhase::Polling(PollProgress::default()),
        };
        (view, effects)
    }

    pub fn job_id(&self) -> &JobId {
        &self.job_id
    }

    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    pub fn phase(&self) -> &ResultPhase {
        &self.phase
    }

    pub fn is_terminal(&self) -> bool {
        match &self.phase {
            ResultPhase::Polling(_) => false,
            ResultPhase::Failed(_) => true,
            ResultPhase::Completed(job) => job.final_success,
        }
    }

    pub(crate) fn poll_due(&mut self, job_id: &JobId) -> Option<Vec<Effect>> {
        if job_id != &self.job_id {
            return None;
        }
        let ResultPhase::Polling(progress) = &mut self.phase else {
            return None;
        };
        match progress.on_tick(&self.policy) {
            TickAction::Check => {}
            TickAction::Reissue => {
                voc_warn!("Status check for {} went unanswered; reissuing", job_id);
            }
            TickAction::GiveUp(failure) => return Some(self.fail(failure)),
        }
        Some(vec![Effect::CheckStatus {
            job_id: job_id.clone(),
        }])
    }

    pub(crate) fn status_received(
        &mut self,
        job_id: &JobId,
        result: Result<JobStatus, ApiFailure>,
    ) -> Option<Vec<Effect>> {
        if job_id != &self.job_id {
            voc_debug!("Ignoring status for stale job {}", job_id);
            return None;
        }
        let ResultPhase::Polling(progress) = &mut self.phase else {
            return None;
        };
        let status = match result {
            Ok(status) => status,
            Err(failure) => {
                // Poll errors never fail the job; the next tick retries.
                voc_warn!("Poll error for {}: {}", job_id, failure);
                progress.on_error();
                return Some(Vec::new());
            }
        };

        match progress.on_status(&self.policy, &status) {
            PollVerdict::Continue => Some(Vec::new()),
            PollVerdict::Completed => {
                voc_info!(
                    "Job {} completed after {} attempts",
                    job_id,
                    progress.attempts()
                );
                self.phase = ResultPhase::Completed(CompletedJob::new(status));
                Some(vec![Effect::StopPolling])
            }
            PollVerdict::Failed(failure) => Some(self.fail(failure)),
        }
    }

    fn fail(&mut self, failure: JobFailure) -> Vec<Effect> {
        voc_warn!("Job {} failed: {:?}", self.job_id, failure);
        self.phase = ResultPhase::Failed(failure);
        vec![Effect::StopPolling]
    }

    pub(crate) fn process_clicked(&mut self) -> Option<Vec<Effect>> {
        let ResultPhase::Completed(job) = &mut self.phase else {
            return None;
        };
        if job.busy || !job.can_process() {
            return None;
        }
        job.busy = true;
        job.error = None;
        Some(vec![Effect::ProcessExtractedData {
            request: ProcessDataRequest::from_job(&self.job_id, &job.status),
        }])
    }

    pub(crate) fn webhook_responded(
        &mut self,
        result: Result<Value, ApiFailure>,
    ) -> Option<Vec<Effect>> {
        let job = self.completed_busy()?;
        job.busy = false;
        match result {
            Ok(response) => {
                let dimensions = decode_dimensions(&response);
                if dimensions.is_empty() {
                    voc_info!("Webhook response carried no dimensions");
                } else {
                    voc_info!("Webhook produced {} dimensions", dimensions.len());
                }
                job.dimensions = dimensions.into_iter().map(DimensionRow::new).collect();
            }
            Err(failure) => {
                voc_warn!("Processing extracted data failed: {}", failure);
                job.error = Some(WizardError::ProcessDataFailed);
            }
        }
        Some(Vec::new())
    }

    pub(crate) fn dimension_edited(
        &mut self,
        index: usize,
        field: DimensionField,
        value: String,
    ) -> Option<Vec<Effect>> {
        let ResultPhase::Completed(job) = &mut self.phase else {
            return None;
        };
        if job.final_success {
            return None;
        }
        let row = job.dimensions.get_mut(index)?;
        match field {
            DimensionField::Name => row.dimension.dimension = value,
            DimensionField::Description => row.dimension.description = value,
            DimensionField::Keywords => {
                row.dimension.keywords = parse_keywords(&value);
                row.keywords_input = value;
            }
        }
        Some(Vec::new())
    }

    pub(crate) fn dimensions_submitted(&mut self) -> Option<Vec<Effect>> {
        let ResultPhase::Completed(job) = &mut self.phase else {
            return None;
        };
        if job.busy || job.final_success || job.dimensions.is_empty() {
            return None;
        }
        job.busy = true;
        job.error = None;
        Some(vec![Effect::SubmitDimensions {
            request: FinalAnalysisRequest::new(job.edited_dimensions(), &job.status),
        }])
    }

    pub(crate) fn dimensions_accepted(
        &mut self,
        result: Result<Value, ApiFailure>,
    ) -> Option<Vec<Effect>> {
        let job = self.completed_busy()?;
        job.busy = false;
        match result {
            Ok(_) => {
                voc_info!("Dimensions submitted for final analysis");
                job.final_success = true;
            }
            Err(failure) => {
                voc_warn!("Dimension submission failed: {}", failure);
                job.error = Some(WizardError::SubmitDimensionsFailed);
            }
        }
        Some(Vec::new())
    }

    fn completed_busy(&mut self) -> Option<&mut CompletedJob> {
        match &mut self.phase {
            ResultPhase::Completed(job) if job.busy => Some(job),
            _ => None,
        }
    }
}
