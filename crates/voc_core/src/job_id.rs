use std::fmt;

use serde::{Deserialize, Serialize};

/// Client-generated identifier of a scraping job: `job_<epoch-ms>_<nonce>`.
///
/// Collision resistant for interactive use only; two wizards started in the
/// same millisecond have a 1 in 1000 chance of sharing an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(String);

pub const JOB_NONCE_LIMIT: u16 = 1000;

impl JobId {
    pub fn from_parts(epoch_millis: i64, nonce: u16) -> Self {
        Self(format!("job_{}_{}", epoch_millis, nonce % JOB_NONCE_LIMIT))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the id matches `job_<digits>_<digits>`.
    pub fn is_well_formed(&self) -> bool {
        let Some(rest) = self.0.strip_prefix("job_") else {
            return false;
        };
        let Some((millis, nonce)) = rest.split_once('_') else {
            return false;
        };
        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        all_digits(millis) && all_digits(nonce)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for JobId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
