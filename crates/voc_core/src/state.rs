use crate::steps::{AppIdsStep, CompetitorsStep, WebsiteStep};
use crate::view_model::AppViewModel;
use crate::{Company, Effect, JobId, PollPolicy, ResultView, WizardState};

/// The component currently mounted by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveStep {
    Website(WebsiteStep),
    Competitors(CompetitorsStep),
    AppIds(AppIdsStep),
    Results(ResultView),
}

impl Default for ActiveStep {
    fn default() -> Self {
        ActiveStep::Website(WebsiteStep::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    wizard: WizardState,
    active: ActiveStep,
    poll_policy: PollPolicy,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_poll_policy(poll_policy: PollPolicy) -> Self {
        Self {
            poll_policy,
            ..Self::default()
        }
    }

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    pub fn active(&self) -> &ActiveStep {
        &self.active
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(&self.wizard, &self.active)
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn active_mut(&mut self) -> &mut ActiveStep {
        &mut self.active
    }

    pub(crate) fn advance_to_competitors(&mut self, competitors: Vec<Company>) {
        self.active = ActiveStep::Competitors(CompetitorsStep::new(competitors.clone()));
        self.wizard = WizardState::Competitors { competitors };
    }

    pub(crate) fn advance_to_app_ids(&mut self, competitors: Vec<Company>) {
        self.active = ActiveStep::AppIds(AppIdsStep::new(competitors.clone()));
        self.wizard = WizardState::AppIds { competitors };
    }

    pub(crate) fn advance_to_results(
        &mut self,
        job_id: JobId,
        competitors: Vec<Company>,
    ) -> Vec<Effect> {
        let (view, effects) = ResultView::start(job_id.clone(), self.poll_policy);
        self.active = ActiveStep::Results(view);
        self.wizard = WizardState::Results {
            competitors,
            job_id,
        };
        effects
    }

    /// Discards all accumulated data; the poll policy is configuration and survives.
    pub(crate) fn reset(&mut self) {
        self.wizard = WizardState::default();
        self.active = ActiveStep::default();
    }
}
