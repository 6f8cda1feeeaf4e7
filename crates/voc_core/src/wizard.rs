use crate::{Company, JobId};

/// Data accumulated across wizard steps.
///
/// Each variant carries exactly what its step has earned so far, so
/// `competitors` exists only from step 2 and `job_id` only at step 4.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WizardState {
    #[default]
    Website,
    Competitors { competitors: Vec<Company> },
    AppIds { competitors: Vec<Company> },
    Results { competitors: Vec<Company>, job_id: JobId },
}

impl WizardState {
    pub fn step(&self) -> u8 {
        match self {
            WizardState::Website => 1,
            WizardState::Competitors { .. } => 2,
            WizardState::AppIds { .. } => 3,
            WizardState::Results { .. } => 4,
        }
    }

    pub fn competitors(&self) -> Option<&[Company]> {
        match self {
            WizardState::Website => None,
            WizardState::Competitors { competitors }
            | WizardState::AppIds { competitors }
            | WizardState::Results { competitors, .. } => Some(competitors),
        }
    }

    pub fn job_id(&self) -> Option<&JobId> {
        match self {
            WizardState::Results { job_id, .. } => Some(job_id),
            _ => None,
        }
    }
}
