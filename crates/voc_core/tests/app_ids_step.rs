use std::time::Duration;

use voc_core::{
    update, ApiFailure, AppState, Company, Effect, JobId, Msg, PollPolicy, ScrapeRequest,
    ScrapeStarted, StepBody, StoreField, WizardError, WizardState,
};

fn company(name: &str) -> Company {
    Company {
        company_name: Some(name.to_string()),
        ..Company::default()
    }
}

fn at_app_ids(state: AppState, companies: Vec<Company>) -> AppState {
    let (state, _) = update(state, Msg::WebsiteInputChanged("https://acme.com".into()));
    let (state, _) = update(state, Msg::WebsiteSubmitted);
    let (state, _) = update(state, Msg::WebsiteAnalyzed(Ok(companies.clone())));
    let (state, _) = update(state, Msg::CompetitorsSubmitted);
    let (state, _) = update(state, Msg::AppIdsResolved(Ok(companies)));
    assert_eq!(state.wizard().step(), 3);
    state
}

fn ack(job_id: &JobId) -> ScrapeStarted {
    ScrapeStarted {
        message: "Scraping started".into(),
        job_id: job_id.to_string(),
    }
}

#[test]
fn edits_fill_and_clear_store_ids() {
    let state = at_app_ids(AppState::new(), vec![company("Acme")]);
    let (state, _) = update(
        state,
        Msg::AppIdEdited {
            index: 0,
            field: StoreField::Android,
            value: "com.acme".into(),
        },
    );
    let (state, _) = update(
        state,
        Msg::AppIdEdited {
            index: 0,
            field: StoreField::Apple,
            value: "42".into(),
        },
    );
    let (state, _) = update(
        state,
        Msg::AppIdEdited {
            index: 0,
            field: StoreField::Apple,
            value: String::new(),
        },
    );

    match state.view().body {
        StepBody::AppIds(view) => {
            assert_eq!(view.rows[0].company_name, "Acme");
            assert_eq!(view.rows[0].android_id, "com.acme");
            assert_eq!(view.rows[0].apple_id, "");
        }
        other => panic!("unexpected body {other:?}"),
    }
}

#[test]
fn start_sends_every_row_with_the_job_id() {
    let state = at_app_ids(AppState::new(), vec![company("Acme"), company("Globex")]);
    let (state, _) = update(
        state,
        Msg::AppIdEdited {
            index: 0,
            field: StoreField::Apple,
            value: "123".into(),
        },
    );
    let job_id = JobId::from_parts(1_700_000_000_000, 7);
    let (_state, effects) = update(
        state,
        Msg::ScrapingRequested {
            job_id: job_id.clone(),
        },
    );

    let acme = Company {
        apple_id: Some("123".into()),
        ..company("Acme")
    };
    assert_eq!(
        effects,
        vec![Effect::StartScraping {
            request: ScrapeRequest {
                brands: vec![acme, company("Globex")],
                job_id,
            }
        }]
    );
}

#[test]
fn accepted_job_advances_to_polling() {
    let policy = PollPolicy {
        interval: Duration::from_secs(3),
        max_attempts: 5,
    };
    let brands = vec![company("Acme")];
    let state = at_app_ids(AppState::with_poll_policy(policy), brands.clone());
    let job_id = JobId::from_parts(1, 2);
    let (state, _) = update(
        state,
        Msg::ScrapingRequested {
            job_id: job_id.clone(),
        },
    );
    let (state, effects) = update(
        state,
        Msg::ScrapingStarted {
            job_id: job_id.clone(),
            result: Ok(ack(&job_id)),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::StartPolling {
            job_id: job_id.clone(),
            interval: Duration::from_secs(3),
        }]
    );
    assert_eq!(
        state.wizard(),
        &WizardState::Results {
            competitors: brands,
            job_id,
        }
    );
    assert!(state.view().header.is_none());
}

#[test]
fn start_failure_reports_and_allows_retry_with_new_id() {
    let state = at_app_ids(AppState::new(), vec![company("Acme")]);
    let first = JobId::from_parts(1, 1);
    let (state, _) = update(state, Msg::ScrapingRequested { job_id: first.clone() });
    let (state, _) = update(
        state,
        Msg::ScrapingStarted {
            job_id: first,
            result: Err(ApiFailure::Server {
                status: 502,
                message: "bad gateway".into(),
            }),
        },
    );
    match state.view().body {
        StepBody::AppIds(view) => {
            assert!(!view.loading);
            assert_eq!(view.error, Some(WizardError::ScrapeStartFailed.to_string()));
        }
        other => panic!("unexpected body {other:?}"),
    }

    let second = JobId::from_parts(2, 2);
    let (_state, effects) = update(state, Msg::ScrapingRequested { job_id: second.clone() });
    assert!(matches!(
        effects.as_slice(),
        [Effect::StartScraping { request }] if request.job_id == second
    ));
}

#[test]
fn acknowledgement_for_another_job_is_ignored() {
    let state = at_app_ids(AppState::new(), vec![company("Acme")]);
    let ours = JobId::from_parts(1, 1);
    let (state, _) = update(state, Msg::ScrapingRequested { job_id: ours });
    let other = JobId::from_parts(9, 9);
    let (state, effects) = update(
        state,
        Msg::ScrapingStarted {
            job_id: other.clone(),
            result: Ok(ack(&other)),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.wizard().step(), 3);
}
