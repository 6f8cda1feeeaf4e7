//! Step components mounted by the orchestrator for wizard steps 1-3.
//!
//! Each step owns its form state, emits effects for backend calls and hands a
//! completion payload back to the orchestrator; none of them touches
//! `WizardState` directly.
mod app_ids;
mod competitors;
mod website;

pub use app_ids::AppIdsStep;
pub use competitors::CompetitorsStep;
pub use website::WebsiteStep;

use crate::Effect;

/// Result of feeding a message to a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StepOutcome<T> {
    /// Message did not apply in the current step state.
    Ignored,
    /// Step state changed; effects may be empty.
    Updated(Vec<Effect>),
    /// Step finished with a payload for the orchestrator.
    Complete(T),
}

/// Stores edited text, clearing the field when the text is empty.
pub(crate) fn set_optional(slot: &mut Option<String>, value: String) {
    *slot = if value.is_empty() { None } else { Some(value) };
}
