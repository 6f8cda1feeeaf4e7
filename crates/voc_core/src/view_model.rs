use crate::results::{CompletedJob, ResultPhase};
use crate::state::ActiveStep;
use crate::{JobFailure, WizardError, WizardState};

pub const STEP_LABELS: [&str; 3] = ["Website", "Competitors", "App IDs"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub step: u8,
    /// Present for steps 1-3 only; step 4 replaces the stepper.
    pub header: Option<StepperHeader>,
    pub body: StepBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepperHeader {
    pub markers: Vec<StepMarker>,
    /// Width of the active progress bar, `(step - 1) / 2`.
    pub progress_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepMarker {
    pub number: u8,
    pub label: &'static str,
    pub reached: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepBody {
    Website(WebsiteView),
    Competitors(CompetitorsView),
    AppIds(AppIdsView),
    Results(ResultsView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsiteView {
    pub url: String,
    pub loading: bool,
    pub can_submit: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitorsView {
    pub rows: Vec<CompetitorRowView>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitorRowView {
    pub number: usize,
    pub company_name: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdsView {
    pub rows: Vec<AppIdRowView>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdRowView {
    pub company_name: String,
    pub android_id: String,
    pub apple_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Polling {
        job_id: String,
        attempts: u32,
        max_attempts: u32,
    },
    Failed {
        reason: String,
    },
    Completed(CompletedView),
    FinalSuccess,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedView {
    pub summary: Option<String>,
    pub dashboard_link: Option<String>,
    pub show_process_action: bool,
    pub busy: bool,
    pub error: Option<String>,
    pub dimensions: Vec<DimensionRowView>,
    pub submit_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionRowView {
    pub number: usize,
    pub dimension: String,
    pub description: String,
    pub keywords: String,
}

impl AppViewModel {
    pub(crate) fn from_state(wizard: &WizardState, active: &ActiveStep) -> Self {
        let step = wizard.step();
        let header = (step < 4).then(|| StepperHeader::for_step(step));
        let body = match active {
            ActiveStep::Website(s) => StepBody::Website(WebsiteView {
                url: s.url().to_string(),
                loading: s.loading(),
                can_submit: s.can_submit(),
                error: message(s.error()),
            }),
            ActiveStep::Competitors(s) => StepBody::Competitors(CompetitorsView {
                rows: s
                    .items()
                    .iter()
                    .enumerate()
                    .map(|(i, c)| CompetitorRowView {
                        number: i + 1,
                        company_name: c.display_name().to_string(),
                        website: c.website.clone().unwrap_or_default(),
                    })
                    .collect(),
                loading: s.loading(),
                error: message(s.error()),
            }),
            ActiveStep::AppIds(s) => StepBody::AppIds(AppIdsView {
                rows: s
                    .items()
                    .iter()
                    .map(|c| AppIdRowView {
                        company_name: c.display_name().to_string(),
                        android_id: c.android_id.clone().unwrap_or_default(),
                        apple_id: c.apple_id.clone().unwrap_or_default(),
                    })
                    .collect(),
                loading: s.loading(),
                error: message(s.error()),
            }),
            ActiveStep::Results(view) => StepBody::Results(match view.phase() {
                ResultPhase::Polling(progress) => ResultsView::Polling {
                    job_id: view.job_id().to_string(),
                    attempts: progress.attempts(),
                    max_attempts: view.policy().max_attempts,
                },
                ResultPhase::Failed(failure) => ResultsView::Failed {
                    reason: describe_failure(failure),
                },
                ResultPhase::Completed(job) if job.final_success() => ResultsView::FinalSuccess,
                ResultPhase::Completed(job) => ResultsView::Completed(completed_view(job)),
            }),
        };
        Self { step, header, body }
    }
}

impl StepperHeader {
    fn for_step(step: u8) -> Self {
        let markers = (1..=3)
            .zip(STEP_LABELS)
            .map(|(number, label)| StepMarker {
                number,
                label,
                reached: step >= number,
            })
            .collect();
        let progress_percent = step.saturating_sub(1).min(2) * 50;
        Self {
            markers,
            progress_percent,
        }
    }
}

fn completed_view(job: &CompletedJob) -> CompletedView {
    let dimensions: Vec<_> = job
        .dimensions()
        .iter()
        .enumerate()
        .map(|(i, row)| DimensionRowView {
            number: i + 1,
            dimension: row.dimension().dimension.clone(),
            description: row.dimension().description.clone(),
            keywords: row.keywords_input().to_string(),
        })
        .collect();
    CompletedView {
        summary: job.status().present_text("summary"),
        dashboard_link: job.status().present_text("dashboard_link"),
        show_process_action: job.can_process(),
        busy: job.busy(),
        error: message(job.error()),
        submit_label: format!("Submit {} Dimensions", dimensions.len()),
        dimensions,
    }
}

fn describe_failure(failure: &JobFailure) -> String {
    match failure {
        JobFailure::Reported { message } if !message.is_empty() => message.clone(),
        JobFailure::Reported { .. } => "The backend reported a failure.".to_string(),
        JobFailure::TimedOut { attempts } => {
            format!("No result after {attempts} status checks.")
        }
    }
}

fn message(error: Option<&WizardError>) -> Option<String> {
    error.map(ToString::to_string)
}
