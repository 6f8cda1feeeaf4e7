use std::time::Duration;

use voc_core::{ApiFailure, Effect, JobId, Msg};
use voc_engine::{ApiCall, ApiError, EngineEvent, EngineHandle, FailureKind};
use voc_logging::{voc_debug, voc_info};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

#[derive(Debug, PartialEq, Eq)]
enum Route {
    Call(ApiCall),
    StartPolling { job_id: JobId, interval: Duration },
    StopPolling,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match route(effect) {
                Route::Call(call) => {
                    voc_info!("Calling {}", call.operation());
                    self.engine.submit(call);
                }
                Route::StartPolling { job_id, interval } => {
                    voc_info!("StartPolling job_id={} interval={:?}", job_id, interval);
                    self.engine.start_polling(job_id, interval);
                }
                Route::StopPolling => {
                    voc_debug!("StopPolling");
                    self.engine.stop_polling();
                }
            }
        }
    }

    /// Everything the engine reported since the last call.
    pub fn drain(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(to_msg(event));
        }
        inbox
    }
}

fn route(effect: Effect) -> Route {
    match effect {
        Effect::AnalyzeWebsite { url } => Route::Call(ApiCall::AnalyzeWebsite { url }),
        Effect::ResolveAppIds { companies } => Route::Call(ApiCall::ResolveAppIds { companies }),
        Effect::StartScraping { request } => Route::Call(ApiCall::StartScraping { request }),
        Effect::CheckStatus { job_id } => Route::Call(ApiCall::CheckStatus { job_id }),
        Effect::ProcessExtractedData { request } => {
            Route::Call(ApiCall::SendToWebhook { request })
        }
        Effect::SubmitDimensions { request } => Route::Call(ApiCall::SubmitDimensions { request }),
        Effect::StartPolling { job_id, interval } => Route::StartPolling { job_id, interval },
        Effect::StopPolling => Route::StopPolling,
    }
}

fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::WebsiteAnalyzed(result) => Msg::WebsiteAnalyzed(result.map_err(to_failure)),
        EngineEvent::AppIdsResolved(result) => Msg::AppIdsResolved(result.map_err(to_failure)),
        EngineEvent::ScrapingStarted { job_id, result } => Msg::ScrapingStarted {
            job_id,
            result: result.map_err(to_failure),
        },
        EngineEvent::StatusChecked { job_id, result } => Msg::StatusReceived {
            job_id,
            result: result.map_err(to_failure),
        },
        EngineEvent::WebhookResponded(result) => Msg::WebhookResponded(result.map_err(to_failure)),
        EngineEvent::DimensionsSubmitted(result) => {
            Msg::DimensionsAccepted(result.map_err(to_failure))
        }
        EngineEvent::PollDue { job_id } => Msg::PollDue { job_id },
    }
}

fn to_failure(err: ApiError) -> ApiFailure {
    match err.kind {
        FailureKind::HttpStatus(status) => ApiFailure::Server {
            status,
            message: err.message,
        },
        FailureKind::Decode => ApiFailure::Decode(err.message),
        FailureKind::InvalidUrl | FailureKind::Timeout | FailureKind::Network => {
            ApiFailure::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use voc_core::{Company, JobStatus};

    fn api_error(kind: FailureKind) -> ApiError {
        ApiError {
            kind,
            message: "boom".into(),
        }
    }

    #[test]
    fn webhook_effect_becomes_send_to_webhook() {
        let request = voc_core::ProcessDataRequest {
            s3_bucket: None,
            s3_key: Some(json!("k")),
            description: None,
            sample_reviews: None,
            job_id: JobId::from_parts(1, 1),
        };
        assert_eq!(
            route(Effect::ProcessExtractedData {
                request: request.clone()
            }),
            Route::Call(ApiCall::SendToWebhook { request })
        );
        assert_eq!(route(Effect::StopPolling), Route::StopPolling);
    }

    #[test]
    fn poll_due_and_status_keep_the_job_id() {
        let job_id = JobId::from_parts(2, 3);
        assert_eq!(
            to_msg(EngineEvent::PollDue {
                job_id: job_id.clone()
            }),
            Msg::PollDue {
                job_id: job_id.clone()
            }
        );
        assert_eq!(
            to_msg(EngineEvent::StatusChecked {
                job_id: job_id.clone(),
                result: Ok(JobStatus::default()),
            }),
            Msg::StatusReceived {
                job_id,
                result: Ok(JobStatus::default()),
            }
        );
    }

    #[test]
    fn engine_errors_map_to_core_failures() {
        assert_eq!(
            to_failure(api_error(FailureKind::HttpStatus(502))),
            ApiFailure::Server {
                status: 502,
                message: "boom".into()
            }
        );
        assert_eq!(
            to_failure(api_error(FailureKind::Decode)),
            ApiFailure::Decode("boom".into())
        );
        assert_eq!(
            to_failure(api_error(FailureKind::Timeout)),
            ApiFailure::Network("timeout: boom".into())
        );
    }

    #[test]
    fn analysis_results_pass_through() {
        let companies = vec![Company::placeholder()];
        assert_eq!(
            to_msg(EngineEvent::WebsiteAnalyzed(Ok(companies.clone()))),
            Msg::WebsiteAnalyzed(Ok(companies))
        );
    }
}
