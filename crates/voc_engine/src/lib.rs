//! VoC engine: backend client, background executor and poll timer.
mod api;
mod engine;
mod job_id;
mod poller;
mod sink;
mod types;

pub use api::{ApiSettings, ReqwestVocApi, VocApi, DEFAULT_BASE_URL};
pub use engine::EngineHandle;
pub use job_id::new_job_id;
pub use poller::{PollTimer, TimerState};
pub use sink::{ChannelEventSink, EventSink};
pub use types::{ApiCall, ApiError, EngineEvent, FailureKind};
