use chrono::Utc;
use rand::Rng;
use voc_core::{JobId, JOB_NONCE_LIMIT};

/// Fresh `job_<epoch-ms>_<0..999>` identifier for a scraping run.
pub fn new_job_id() -> JobId {
    let nonce = rand::rng().random_range(0..JOB_NONCE_LIMIT);
    JobId::from_parts(Utc::now().timestamp_millis(), nonce)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_well_formed() {
        for _ in 0..50 {
            let id = new_job_id();
            assert!(id.is_well_formed(), "{id}");
            let nonce: u16 = id.as_str().rsplit('_').next().unwrap().parse().unwrap();
            assert!(nonce < JOB_NONCE_LIMIT);
        }
    }
}
