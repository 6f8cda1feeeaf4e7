use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use voc_core::JobId;
use voc_engine::{EngineEvent, EventSink, PollTimer, TimerState};

#[derive(Default)]
struct TestSink {
    events: Mutex<Vec<EngineEvent>>,
}

impl TestSink {
    fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    fn job_ids(&self) -> Vec<JobId> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                EngineEvent::PollDue { job_id } => Some(job_id.clone()),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

const INTERVAL: Duration = Duration::from_secs(10);

#[tokio::test(start_paused = true)]
async fn fires_immediately_then_every_interval() {
    let sink = Arc::new(TestSink::default());
    let mut timer = PollTimer::new();
    assert_eq!(timer.state(), &TimerState::Idle);

    let job = JobId::from_parts(1, 1);
    timer.schedule(&Handle::current(), job.clone(), INTERVAL, sink.clone());
    assert_eq!(
        timer.state(),
        &TimerState::Scheduled {
            job_id: job.clone(),
            interval: INTERVAL
        }
    );

    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(sink.count(), 1);

    tokio::time::sleep(INTERVAL).await;
    assert_eq!(sink.count(), 2);

    tokio::time::sleep(INTERVAL * 3).await;
    assert_eq!(sink.count(), 5);
    assert!(sink.job_ids().iter().all(|id| id == &job));
}

#[tokio::test(start_paused = true)]
async fn cancel_stops_further_ticks() {
    let sink = Arc::new(TestSink::default());
    let mut timer = PollTimer::new();
    timer.schedule(&Handle::current(), JobId::from_parts(1, 1), INTERVAL, sink.clone());
    tokio::time::sleep(Duration::from_millis(1)).await;

    timer.cancel();
    assert_eq!(timer.state(), &TimerState::Cancelled);
    tokio::time::sleep(INTERVAL * 5).await;
    assert_eq!(sink.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn rescheduling_replaces_the_previous_job() {
    let sink = Arc::new(TestSink::default());
    let mut timer = PollTimer::new();
    let first = JobId::from_parts(1, 1);
    let second = JobId::from_parts(2, 2);

    timer.schedule(&Handle::current(), first.clone(), INTERVAL, sink.clone());
    tokio::time::sleep(Duration::from_millis(1)).await;
    timer.schedule(&Handle::current(), second.clone(), INTERVAL, sink.clone());
    tokio::time::sleep(INTERVAL + Duration::from_millis(1)).await;

    assert_eq!(sink.job_ids(), vec![first, second.clone(), second]);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_timer_cancels_it() {
    let sink = Arc::new(TestSink::default());
    {
        let mut timer = PollTimer::new();
        timer.schedule(&Handle::current(), JobId::from_parts(3, 3), INTERVAL, sink.clone());
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    tokio::time::sleep(INTERVAL * 2).await;
    assert_eq!(sink.count(), 1);
}
