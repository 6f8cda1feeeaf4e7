use crate::state::ActiveStep;
use crate::steps::{AppIdsStep, CompetitorsStep, StepOutcome, WebsiteStep};
use crate::{AppState, Company, Effect, JobId, Msg, ResultView};

/// Pure update function: applies a message to state and returns any effects.
///
/// Messages that do not apply to the mounted step are dropped without
/// touching state; everything else marks the state dirty.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let handled = match msg {
        Msg::WebsiteInputChanged(text) => on_website(&mut state, |s| s.input_changed(text)),
        Msg::WebsiteSubmitted => on_website(&mut state, WebsiteStep::submit),
        Msg::WebsiteAnalyzed(result) => on_website(&mut state, |s| s.analyzed(result)),

        Msg::CompetitorAdded => on_competitors(&mut state, CompetitorsStep::add),
        Msg::CompetitorRemoved { index } => on_competitors(&mut state, |s| s.remove(index)),
        Msg::CompetitorEdited {
            index,
            field,
            value,
        } => on_competitors(&mut state, |s| s.edit(index, field, value)),
        Msg::CompetitorsSubmitted => on_competitors(&mut state, CompetitorsStep::submit),
        Msg::AppIdsResolved(result) => on_competitors(&mut state, |s| s.resolved(result)),

        Msg::AppIdEdited {
            index,
            field,
            value,
        } => on_app_ids(&mut state, |s| s.edit(index, field, value)),
        Msg::ScrapingRequested { job_id } => on_app_ids(&mut state, |s| s.request(job_id)),
        Msg::ScrapingStarted { job_id, result } => {
            on_app_ids(&mut state, |s| s.started(job_id, result))
        }

        Msg::PollDue { job_id } => on_results(&mut state, |r| r.poll_due(&job_id)),
        Msg::StatusReceived { job_id, result } => {
            on_results(&mut state, |r| r.status_received(&job_id, result))
        }
        Msg::ProcessDataClicked => on_results(&mut state, ResultView::process_clicked),
        Msg::WebhookResponded(result) => on_results(&mut state, |r| r.webhook_responded(result)),
        Msg::DimensionEdited {
            index,
            field,
            value,
        } => on_results(&mut state, |r| r.dimension_edited(index, field, value)),
        Msg::DimensionsSubmitted => on_results(&mut state, ResultView::dimensions_submitted),
        Msg::DimensionsAccepted(result) => {
            on_results(&mut state, |r| r.dimensions_accepted(result))
        }
        Msg::ResetClicked => reset(&mut state),

        Msg::NoOp => None,
    };

    let effects = match handled {
        Some(effects) => {
            state.mark_dirty();
            effects
        }
        None => Vec::new(),
    };
    (state, effects)
}

fn on_website(
    state: &mut AppState,
    f: impl FnOnce(&mut WebsiteStep) -> StepOutcome<Vec<Company>>,
) -> Option<Vec<Effect>> {
    let outcome = match state.active_mut() {
        ActiveStep::Website(step) => f(step),
        _ => return None,
    };
    match outcome {
        StepOutcome::Ignored => None,
        StepOutcome::Updated(effects) => Some(effects),
        StepOutcome::Complete(companies) => {
            state.advance_to_competitors(companies);
            Some(Vec::new())
        }
    }
}

fn on_competitors(
    state: &mut AppState,
    f: impl FnOnce(&mut CompetitorsStep) -> StepOutcome<Vec<Company>>,
) -> Option<Vec<Effect>> {
    let outcome = match state.active_mut() {
        ActiveStep::Competitors(step) => f(step),
        _ => return None,
    };
    match outcome {
        StepOutcome::Ignored => None,
        StepOutcome::Updated(effects) => Some(effects),
        StepOutcome::Complete(companies) => {
            state.advance_to_app_ids(companies);
            Some(Vec::new())
        }
    }
}

fn on_app_ids(
    state: &mut AppState,
    f: impl FnOnce(&mut AppIdsStep) -> StepOutcome<(JobId, Vec<Company>)>,
) -> Option<Vec<Effect>> {
    let outcome = match state.active_mut() {
        ActiveStep::AppIds(step) => f(step),
        _ => return None,
    };
    match outcome {
        StepOutcome::Ignored => None,
        StepOutcome::Updated(effects) => Some(effects),
        StepOutcome::Complete((job_id, brands)) => Some(state.advance_to_results(job_id, brands)),
    }
}

fn on_results(
    state: &mut AppState,
    f: impl FnOnce(&mut ResultView) -> Option<Vec<Effect>>,
) -> Option<Vec<Effect>> {
    match state.active_mut() {
        ActiveStep::Results(view) => f(view),
        _ => None,
    }
}

fn reset(state: &mut AppState) -> Option<Vec<Effect>> {
    // Only the terminal views offer a reset.
    let terminal = matches!(state.active(), ActiveStep::Results(view) if view.is_terminal());
    if !terminal {
        return None;
    }
    state.reset();
    Some(vec![Effect::StopPolling])
}
