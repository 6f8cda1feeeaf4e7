use std::time::Duration;

use crate::{JobFailure, JobStatus};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_POLL_ATTEMPTS,
        }
    }
}

/// Attempt bookkeeping while a job is being polled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PollProgress {
    attempts: u32,
    in_flight: bool,
}

/// What a poll tick should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TickAction {
    Check,
    /// The previous check went unanswered for a whole interval and is treated
    /// as lost; a new, counted check replaces it.
    Reissue,
    /// The cap was already reached and the last check never came back.
    GiveUp(JobFailure),
}

/// What a status response means for the polling state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PollVerdict {
    Continue,
    Completed,
    Failed(JobFailure),
}

impl PollProgress {
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Every tick issues a counted check. Failed checks never end polling;
    /// only a hung check past the cap does.
    pub(crate) fn on_tick(&mut self, policy: &PollPolicy) -> TickAction {
        let lost = self.in_flight;
        if lost && self.attempts > policy.max_attempts {
            return TickAction::GiveUp(JobFailure::TimedOut {
                attempts: self.attempts,
            });
        }
        self.attempts += 1;
        self.in_flight = true;
        if lost {
            TickAction::Reissue
        } else {
            TickAction::Check
        }
    }

    pub(crate) fn on_status(&mut self, policy: &PollPolicy, status: &JobStatus) -> PollVerdict {
        self.in_flight = false;
        if status.is_completed() {
            PollVerdict::Completed
        } else if status.is_failed() {
            PollVerdict::Failed(JobFailure::Reported {
                message: status.message.clone(),
            })
        } else if self.attempts > policy.max_attempts {
            PollVerdict::Failed(JobFailure::TimedOut {
                attempts: self.attempts,
            })
        } else {
            PollVerdict::Continue
        }
    }

    pub(crate) fn on_error(&mut self) {
        self.in_flight = false;
    }
}
