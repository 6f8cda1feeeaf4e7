use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::{json, Value};
use voc_core::{
    Company, FinalAnalysisRequest, JobId, JobStatus, ProcessDataRequest, ScrapeRequest,
    ScrapeStarted,
};
use voc_engine::{ApiCall, ApiError, ApiSettings, EngineEvent, EngineHandle, FailureKind, VocApi};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WAIT: Duration = Duration::from_secs(5);

/// Polls the event queue the way the UI loop does until `wait` runs out.
fn next_event(engine: &EngineHandle, wait: Duration) -> Option<EngineEvent> {
    let deadline = Instant::now() + wait;
    loop {
        if let Some(event) = engine.try_recv() {
            return Some(event);
        }
        if Instant::now() >= deadline {
            return None;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
}

/// Answers every status check with "running" and fails everything else.
struct RunningBackend;

#[async_trait::async_trait]
impl VocApi for RunningBackend {
    async fn analyze_website(&self, _url: &str) -> Result<Vec<Company>, ApiError> {
        Err(unavailable())
    }

    async fn resolve_app_ids(&self, _companies: &[Company]) -> Result<Vec<Company>, ApiError> {
        Err(unavailable())
    }

    async fn start_scraping(&self, _request: &ScrapeRequest) -> Result<ScrapeStarted, ApiError> {
        Err(unavailable())
    }

    async fn check_status(&self, _job_id: &JobId) -> Result<JobStatus, ApiError> {
        Ok(JobStatus::default())
    }

    async fn send_to_webhook(&self, _request: &ProcessDataRequest) -> Result<Value, ApiError> {
        Err(unavailable())
    }

    async fn submit_dimensions(
        &self,
        _request: &FinalAnalysisRequest,
    ) -> Result<Value, ApiError> {
        Err(unavailable())
    }
}

fn unavailable() -> ApiError {
    ApiError {
        kind: FailureKind::HttpStatus(503),
        message: "unavailable".into(),
    }
}

#[tokio::test]
async fn calls_are_answered_with_events() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-website"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"company_name": "Acme"}])))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(ApiSettings::new(server.uri())).expect("engine");
    engine.submit(ApiCall::AnalyzeWebsite {
        url: "https://acme.com".into(),
    });

    match next_event(&engine, WAIT) {
        Some(EngineEvent::WebsiteAnalyzed(Ok(companies))) => {
            assert_eq!(companies[0].company_name.as_deref(), Some("Acme"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn scraping_failures_carry_the_job_id() {
    let engine = EngineHandle::with_api(Arc::new(RunningBackend));
    let job_id = JobId::from_parts(9, 9);
    engine.submit(ApiCall::StartScraping {
        request: ScrapeRequest {
            brands: Vec::new(),
            job_id: job_id.clone(),
        },
    });
    assert_eq!(
        next_event(&engine, WAIT),
        Some(EngineEvent::ScrapingStarted {
            job_id,
            result: Err(unavailable()),
        })
    );
}

#[test]
fn polling_emits_due_events_until_stopped() {
    let engine = EngineHandle::with_api(Arc::new(RunningBackend));
    let job_id = JobId::from_parts(4, 2);
    engine.start_polling(job_id.clone(), Duration::from_millis(20));

    for _ in 0..3 {
        assert_eq!(
            next_event(&engine, WAIT),
            Some(EngineEvent::PollDue {
                job_id: job_id.clone()
            })
        );
    }

    engine.stop_polling();
    // Drain anything that raced the stop command, then expect silence.
    std::thread::sleep(Duration::from_millis(50));
    while engine.try_recv().is_some() {}
    assert_eq!(next_event(&engine, Duration::from_millis(200)), None);
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = EngineHandle::new(ApiSettings::new("not a url")).err().expect("error");
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
