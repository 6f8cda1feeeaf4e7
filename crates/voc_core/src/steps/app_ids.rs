use voc_logging::{voc_info, voc_warn};

use super::{set_optional, StepOutcome};
use crate::{ApiFailure, Company, Effect, JobId, ScrapeRequest, ScrapeStarted, StoreField, WizardError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppIdsStep {
    items: Vec<Company>,
    loading: bool,
    pending_job: Option<JobId>,
    error: Option<WizardError>,
}

impl AppIdsStep {
    pub fn new(initial: Vec<Company>) -> Self {
        Self {
            items: initial,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[Company] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&WizardError> {
        self.error.as_ref()
    }

    pub(crate) fn edit(
        &mut self,
        index: usize,
        field: StoreField,
        value: String,
    ) -> StepOutcome<(JobId, Vec<Company>)> {
        let Some(item) = self.items.get_mut(index) else {
            return StepOutcome::Ignored;
        };
        match field {
            StoreField::Android => set_optional(&mut item.android_id, value),
            StoreField::Apple => set_optional(&mut item.apple_id, value),
        }
        StepOutcome::Updated(Vec::new())
    }

    /// Rows without any store id are still sent; the backend skips them.
    pub(crate) fn request(&mut self, job_id: JobId) -> StepOutcome<(JobId, Vec<Company>)> {
        if self.loading {
            return StepOutcome::Ignored;
        }
        self.loading = true;
        self.error = None;
        self.pending_job = Some(job_id.clone());
        StepOutcome::Updated(vec![Effect::StartScraping {
            request: ScrapeRequest {
                brands: self.items.clone(),
                job_id,
            },
        }])
    }

    pub(crate) fn started(
        &mut self,
        job_id: JobId,
        result: Result<ScrapeStarted, ApiFailure>,
    ) -> StepOutcome<(JobId, Vec<Company>)> {
        if self.pending_job.as_ref() != Some(&job_id) {
            return StepOutcome::Ignored;
        }
        self.pending_job = None;
        match result {
            Ok(ack) => {
                voc_info!("Scraping job {} accepted: {}", job_id, ack.message);
                // Loading stays on; the orchestrator unmounts this step.
                StepOutcome::Complete((job_id, self.items.clone()))
            }
            Err(failure) => {
                voc_warn!("Failed to start scraping job {}: {}", job_id, failure);
                self.loading = false;
                self.error = Some(WizardError::ScrapeStartFailed);
                StepOutcome::Updated(Vec::new())
            }
        }
    }
}
