use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use url::Url;
use voc_core::{
    Company, FinalAnalysisRequest, JobId, JobStatus, ProcessDataRequest, ScrapeRequest,
    ScrapeStarted,
};
use voc_logging::{voc_debug, voc_info, voc_warn};

use crate::{ApiError, FailureKind};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

const ANALYZE_WEBSITE: &str = "api/analyze-website";
const RESOLVE_APP_IDS: &str = "api/appids";
const SCRAP_REVIEWS: &str = "api/scrap-reviews";
const CHECK_STATUS: &str = "api/check-status";
const SCRAPPED_DATA: &str = "api/scrapped-data";
const FINAL_ANALYSIS: &str = "api/final-analysis";

/// Where the backend lives and how long to wait for it.
///
/// Timeouts default to `None`, leaving the transport defaults in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl ApiSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Parses the base url so endpoint paths can be joined onto it.
    pub fn parsed_base_url(&self) -> Result<Url, ApiError> {
        let mut base_url = Url::parse(self.base_url.trim())
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::new(
                FailureKind::InvalidUrl,
                format!("{base_url} cannot be used as a backend url"),
            ));
        }
        // Relative joins replace the last segment unless the path ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(base_url)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

/// The backend operations the wizard depends on.
#[async_trait::async_trait]
pub trait VocApi: Send + Sync {
    async fn analyze_website(&self, url: &str) -> Result<Vec<Company>, ApiError>;

    async fn resolve_app_ids(&self, companies: &[Company]) -> Result<Vec<Company>, ApiError>;

    async fn start_scraping(&self, request: &ScrapeRequest) -> Result<ScrapeStarted, ApiError>;

    async fn check_status(&self, job_id: &JobId) -> Result<JobStatus, ApiError>;

    /// The response is backend-defined and returned untouched.
    async fn send_to_webhook(&self, request: &ProcessDataRequest) -> Result<Value, ApiError>;

    async fn submit_dimensions(&self, request: &FinalAnalysisRequest)
        -> Result<Value, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestVocApi {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestVocApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let base_url = settings.parsed_base_url()?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        voc_debug!("POST {}", url);
        let request = self.client.post(url).json(body);
        self.execute(path, request).await
    }

    async fn execute<R>(&self, path: &str, request: reqwest::RequestBuilder) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let result = send_and_decode(request).await;
        match &result {
            Ok(_) => voc_info!("{} succeeded", path),
            Err(err) => voc_warn!("{} failed: {}", path, err),
        }
        result
    }
}

#[async_trait::async_trait]
impl VocApi for ReqwestVocApi {
    async fn analyze_website(&self, url: &str) -> Result<Vec<Company>, ApiError> {
        self.post_json(ANALYZE_WEBSITE, &json!({ "website": url }))
            .await
    }

    async fn resolve_app_ids(&self, companies: &[Company]) -> Result<Vec<Company>, ApiError> {
        self.post_json(RESOLVE_APP_IDS, companies).await
    }

    async fn start_scraping(&self, request: &ScrapeRequest) -> Result<ScrapeStarted, ApiError> {
        self.post_json(SCRAP_REVIEWS, request).await
    }

    async fn check_status(&self, job_id: &JobId) -> Result<JobStatus, ApiError> {
        let mut url = self.endpoint(CHECK_STATUS)?;
        url.query_pairs_mut().append_pair("job_id", job_id.as_str());
        voc_debug!("GET {}", url);
        let request = self.client.get(url);
        self.execute(CHECK_STATUS, request).await
    }

    async fn send_to_webhook(&self, request: &ProcessDataRequest) -> Result<Value, ApiError> {
        self.post_json(SCRAPPED_DATA, request).await
    }

    async fn submit_dimensions(
        &self,
        request: &FinalAnalysisRequest,
    ) -> Result<Value, ApiError> {
        self.post_json(FINAL_ANALYSIS, request).await
    }
}

async fn send_and_decode<R: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<R, ApiError> {
    let response = request.send().await.map_err(map_reqwest_error)?;
    let status = response.status();
    let bytes = response.bytes().await.map_err(map_reqwest_error)?;
    if !status.is_success() {
        return Err(status_error(status, &bytes));
    }
    decode_body(&bytes)
}

/// An empty body decodes as JSON `null`.
fn decode_body<R: DeserializeOwned>(bytes: &[u8]) -> Result<R, ApiError> {
    let bytes = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        bytes
    };
    serde_json::from_slice(bytes).map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
}

fn status_error(status: StatusCode, body: &[u8]) -> ApiError {
    let detail = String::from_utf8_lossy(body);
    let detail = detail.trim();
    let message = if detail.is_empty() {
        status.to_string()
    } else {
        format!("{status}: {detail}")
    };
    ApiError::new(FailureKind::HttpStatus(status.as_u16()), message)
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return ApiError::new(FailureKind::InvalidUrl, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::Decode, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
