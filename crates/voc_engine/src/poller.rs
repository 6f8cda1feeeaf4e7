//! Repeating poll timer. One schedule at a time; a new schedule cancels the old one.
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use voc_core::JobId;
use voc_logging::voc_debug;

use crate::{EngineEvent, EventSink};

const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Scheduled { job_id: JobId, interval: Duration },
    Cancelled,
}

#[derive(Debug)]
pub struct PollTimer {
    state: TimerState,
    token: Option<CancellationToken>,
}

impl Default for PollTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl PollTimer {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            token: None,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Emits `PollDue` right away and then every `interval` until cancelled.
    pub fn schedule(
        &mut self,
        runtime: &Handle,
        job_id: JobId,
        interval: Duration,
        sink: Arc<dyn EventSink>,
    ) {
        self.cancel();
        let token = CancellationToken::new();
        let interval = interval.max(MIN_INTERVAL);
        voc_debug!("Poll timer scheduled for {} every {:?}", job_id, interval);
        runtime.spawn(run_timer(job_id.clone(), interval, sink, token.clone()));
        self.token = Some(token);
        self.state = TimerState::Scheduled { job_id, interval };
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
            if let TimerState::Scheduled { job_id, .. } = &self.state {
                voc_debug!("Poll timer for {} cancelled", job_id);
            }
            self.state = TimerState::Cancelled;
        }
    }
}

impl Drop for PollTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run_timer(
    job_id: JobId,
    interval: Duration,
    sink: Arc<dyn EventSink>,
    token: CancellationToken,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = ticker.tick() => sink.emit(EngineEvent::PollDue { job_id: job_id.clone() }),
        }
    }
}
