use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use voc_core::JobId;
use voc_logging::voc_debug;

use crate::{
    ApiCall, ApiError, ApiSettings, ChannelEventSink, EngineEvent, EventSink, PollTimer,
    ReqwestVocApi, VocApi,
};

enum EngineCommand {
    Call(ApiCall),
    StartPolling { job_id: JobId, interval: Duration },
    StopPolling,
}

/// Runs backend calls and the poll timer on a background tokio runtime.
///
/// Results come back as `EngineEvent`s through `try_recv`.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let api = ReqwestVocApi::new(settings)?;
        Ok(Self::with_api(Arc::new(api)))
    }

    pub fn with_api(api: Arc<dyn VocApi>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let sink: Arc<dyn EventSink> = Arc::new(ChannelEventSink::new(event_tx));
            let mut timer = PollTimer::new();
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Call(call) => {
                        let api = api.clone();
                        let sink = sink.clone();
                        runtime.spawn(async move {
                            sink.emit(dispatch(api.as_ref(), call).await);
                        });
                    }
                    EngineCommand::StartPolling { job_id, interval } => {
                        timer.schedule(runtime.handle(), job_id, interval, sink.clone());
                    }
                    EngineCommand::StopPolling => timer.cancel(),
                }
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, call: ApiCall) {
        voc_debug!("Queueing {}", call.operation());
        let _ = self.cmd_tx.send(EngineCommand::Call(call));
    }

    /// Replaces any running poll schedule.
    pub fn start_polling(&self, job_id: JobId, interval: Duration) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::StartPolling { job_id, interval });
    }

    pub fn stop_polling(&self) {
        let _ = self.cmd_tx.send(EngineCommand::StopPolling);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn dispatch(api: &dyn VocApi, call: ApiCall) -> EngineEvent {
    match call {
        ApiCall::AnalyzeWebsite { url } => EngineEvent::WebsiteAnalyzed(api.analyze_website(&url).await),
        ApiCall::ResolveAppIds { companies } => {
            EngineEvent::AppIdsResolved(api.resolve_app_ids(&companies).await)
        }
        ApiCall::StartScraping { request } => {
            let result = api.start_scraping(&request).await;
            EngineEvent::ScrapingStarted {
                job_id: request.job_id,
                result,
            }
        }
        ApiCall::CheckStatus { job_id } => {
            let result = api.check_status(&job_id).await;
            EngineEvent::StatusChecked { job_id, result }
        }
        ApiCall::SendToWebhook { request } => {
            EngineEvent::WebhookResponded(api.send_to_webhook(&request).await)
        }
        ApiCall::SubmitDimensions { request } => {
            EngineEvent::DimensionsSubmitted(api.submit_dimensions(&request).await)
        }
    }
}
