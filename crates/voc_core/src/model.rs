use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::dimensions::parse_keywords;
use crate::JobId;

/// A brand taking part in the analysis: the analyzed company itself or a competitor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Company {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_main: Option<bool>,
}

impl Company {
    /// Row appended by the "add competitor" action.
    pub fn placeholder() -> Self {
        Self {
            company_name: Some("New Company".to_string()),
            ..Self::default()
        }
    }

    pub fn display_name(&self) -> &str {
        self.company_name.as_deref().unwrap_or("")
    }

    pub fn has_store_id(&self) -> bool {
        let non_empty = |id: &Option<String>| id.as_deref().is_some_and(|s| !s.trim().is_empty());
        non_empty(&self.android_id) || non_empty(&self.apple_id)
    }
}

/// Editable identity fields on the competitors step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyField {
    Name,
    Website,
}

/// Editable store identifiers on the app ids step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreField {
    Android,
    Apple,
}

/// Body of `POST /api/scrap-reviews`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeRequest {
    pub brands: Vec<Company>,
    pub job_id: JobId,
}

/// Acknowledgement returned by `POST /api/scrap-reviews`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ScrapeStarted {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub job_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    #[default]
    Pending,
    Running,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

/// Snapshot returned by `GET /api/check-status`.
///
/// Fields the backend adds beyond the typed ones (`s3_bucket`, `description`,
/// `sample_reviews`, ...) are kept in `extra` so they can be forwarded later.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobStatus {
    #[serde(default)]
    pub status: JobState,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobStatus {
    /// Either signal is enough: an explicit `completed` or a non-empty `s3_key`.
    pub fn is_completed(&self) -> bool {
        self.status == JobState::Completed || self.s3_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    pub fn is_failed(&self) -> bool {
        self.status == JobState::Failed
    }

    /// Looks up a payload field by name, returning it only when it is truthy.
    pub fn present_field(&self, key: &str) -> Option<Value> {
        let text = |v: &Option<String>| v.clone().map(Value::String);
        let value = match key {
            "message" => Some(Value::String(self.message.clone())),
            "s3_key" => text(&self.s3_key),
            "summary" => text(&self.summary),
            "dashboard_link" => text(&self.dashboard_link),
            "body" => self.body.clone(),
            "result" => self.result.clone(),
            other => self.extra.get(other).cloned(),
        };
        value.filter(is_truthy)
    }

    pub fn present_text(&self, key: &str) -> Option<String> {
        self.present_field(key).map(|value| match value {
            Value::String(s) => s,
            other => other.to_string(),
        })
    }
}

/// A named analytical category derived from scraped reviews.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dimension {
    #[serde(default, deserialize_with = "string_or_default")]
    pub dimension: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "keywords_from_any")]
    pub keywords: Vec<String>,
}

/// Editable fields of a dimension row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionField {
    Name,
    Description,
    Keywords,
}

/// Body of `POST /api/scrapped-data`. Absent fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessDataRequest {
    pub s3_bucket: Option<Value>,
    pub s3_key: Option<Value>,
    pub description: Option<Value>,
    pub sample_reviews: Option<Value>,
    pub job_id: JobId,
}

impl ProcessDataRequest {
    pub fn from_job(job_id: &JobId, status: &JobStatus) -> Self {
        Self {
            s3_bucket: status.present_field("s3_bucket"),
            s3_key: status.present_field("s3_key"),
            description: status.present_field("description"),
            sample_reviews: status.present_field("sample_reviews"),
            job_id: job_id.clone(),
        }
    }
}

pub const FALLBACK_BUCKET: &str = "simulation";
pub const FALLBACK_FILE_KEY: &str = "simulation.pdf";

/// Body of `POST /api/final-analysis`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalAnalysisRequest {
    pub dimensions: Vec<Dimension>,
    pub bucket_name: String,
    pub file_key: String,
}

impl FinalAnalysisRequest {
    pub fn new(dimensions: Vec<Dimension>, status: &JobStatus) -> Self {
        Self {
            dimensions,
            bucket_name: status
                .present_text("s3_bucket")
                .unwrap_or_else(|| FALLBACK_BUCKET.to_string()),
            file_key: status
                .present_text("s3_key")
                .unwrap_or_else(|| FALLBACK_FILE_KEY.to_string()),
        }
    }
}

/// JavaScript-style truthiness; the backend contract relies on it for optional fields.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn keywords_from_any<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        Value::String(text) => parse_keywords(&text),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn s3_key_alone_marks_completion() {
        let status: JobStatus =
            serde_json::from_value(json!({"status": "running", "message": "", "s3_key": "abc"}))
                .unwrap();
        assert!(status.is_completed());

        let empty: JobStatus =
            serde_json::from_value(json!({"status": "running", "s3_key": ""})).unwrap();
        assert!(!empty.is_completed());
    }

    #[test]
    fn unknown_status_is_not_terminal() {
        let status: JobStatus = serde_json::from_value(json!({"status": "queued"})).unwrap();
        assert_eq!(status.status, JobState::Unknown);
        assert!(!status.is_completed());
        assert!(!status.is_failed());
    }

    #[test]
    fn extra_fields_are_kept() {
        let status: JobStatus = serde_json::from_value(json!({
            "status": "completed",
            "message": "done",
            "s3_bucket": "bucket",
            "sample_reviews": [],
            "description": ""
        }))
        .unwrap();
        assert_eq!(status.present_field("s3_bucket"), Some(json!("bucket")));
        assert_eq!(status.present_field("sample_reviews"), Some(json!([])));
        assert_eq!(status.present_field("description"), None);
        assert_eq!(status.present_field("missing"), None);
    }

    #[test]
    fn company_serialization_omits_absent_fields() {
        let company = Company {
            company_name: Some("Acme".into()),
            apple_id: Some("123".into()),
            ..Company::default()
        };
        assert_eq!(
            serde_json::to_value(&company).unwrap(),
            json!({"company_name": "Acme", "apple_id": "123"})
        );
    }

    #[test]
    fn dimension_accepts_keywords_as_text() {
        let dim: Dimension = serde_json::from_value(json!({
            "dimension": "Price",
            "keywords": "cheap, expensive"
        }))
        .unwrap();
        assert_eq!(dim.description, "");
        assert_eq!(dim.keywords, vec!["cheap", "expensive"]);
    }
}
