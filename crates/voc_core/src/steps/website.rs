use url::Url;
use voc_logging::{voc_info, voc_warn};

use super::StepOutcome;
use crate::{ApiFailure, Company, Effect, WizardError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WebsiteStep {
    url: String,
    loading: bool,
    error: Option<WizardError>,
}

impl WebsiteStep {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&WizardError> {
        self.error.as_ref()
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.url.is_empty()
    }

    pub(crate) fn input_changed(&mut self, text: String) -> StepOutcome<Vec<Company>> {
        // The input is disabled while a request is in flight.
        if self.loading {
            return StepOutcome::Ignored;
        }
        self.url = text;
        StepOutcome::Updated(Vec::new())
    }

    pub(crate) fn submit(&mut self) -> StepOutcome<Vec<Company>> {
        if !self.can_submit() {
            return StepOutcome::Ignored;
        }
        let candidate = self.url.trim();
        if Url::parse(candidate).is_err() {
            self.error = Some(WizardError::InvalidUrl);
            return StepOutcome::Updated(Vec::new());
        }

        self.loading = true;
        self.error = None;
        StepOutcome::Updated(vec![Effect::AnalyzeWebsite {
            url: candidate.to_string(),
        }])
    }

    pub(crate) fn analyzed(
        &mut self,
        result: Result<Vec<Company>, ApiFailure>,
    ) -> StepOutcome<Vec<Company>> {
        if !self.loading {
            return StepOutcome::Ignored;
        }
        self.loading = false;
        match result {
            Ok(companies) => {
                voc_info!("Website analysis returned {} companies", companies.len());
                StepOutcome::Complete(companies)
            }
            Err(failure) => {
                voc_warn!("Website analysis failed: {}", failure);
                self.error = Some(WizardError::AnalyzeFailed);
                StepOutcome::Updated(Vec::new())
            }
        }
    }
}
