use pretty_assertions::assert_eq;
use voc_core::{
    update, ApiFailure, AppState, Company, CompanyField, Effect, Msg, StepBody, WizardError,
    WizardState,
};

fn company(name: &str) -> Company {
    Company {
        company_name: Some(name.to_string()),
        ..Company::default()
    }
}

fn at_competitors(companies: Vec<Company>) -> AppState {
    let (state, _) = update(AppState::new(), Msg::WebsiteInputChanged("https://acme.com".into()));
    let (state, _) = update(state, Msg::WebsiteSubmitted);
    let (state, _) = update(state, Msg::WebsiteAnalyzed(Ok(companies)));
    assert_eq!(state.wizard().step(), 2);
    state
}

fn rows(state: &AppState) -> Vec<(usize, String, String)> {
    match state.view().body {
        StepBody::Competitors(view) => view
            .rows
            .into_iter()
            .map(|r| (r.number, r.company_name, r.website))
            .collect(),
        other => panic!("expected competitors step, got {other:?}"),
    }
}

#[test]
fn list_is_editable_in_place() {
    let state = at_competitors(vec![company("Acme"), company("Globex")]);

    let (state, _) = update(state, Msg::CompetitorAdded);
    let (state, _) = update(
        state,
        Msg::CompetitorEdited {
            index: 2,
            field: CompanyField::Name,
            value: "Initech".into(),
        },
    );
    let (state, _) = update(
        state,
        Msg::CompetitorEdited {
            index: 2,
            field: CompanyField::Website,
            value: "https://initech.com".into(),
        },
    );
    let (state, _) = update(state, Msg::CompetitorRemoved { index: 1 });

    assert_eq!(
        rows(&state),
        vec![
            (1, "Acme".to_string(), String::new()),
            (2, "Initech".to_string(), "https://initech.com".to_string()),
        ]
    );
}

#[test]
fn added_row_is_a_placeholder() {
    let state = at_competitors(Vec::new());
    let (state, _) = update(state, Msg::CompetitorAdded);
    assert_eq!(rows(&state), vec![(1, "New Company".to_string(), String::new())]);
}

#[test]
fn out_of_range_edits_are_ignored() {
    let mut state = at_competitors(vec![company("Acme")]);
    state.consume_dirty();
    let (mut state, effects) = update(state, Msg::CompetitorRemoved { index: 5 });
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(rows(&state).len(), 1);
}

#[test]
fn empty_list_is_rejected_without_a_call() {
    let state = at_competitors(vec![company("Acme")]);
    let (state, _) = update(state, Msg::CompetitorRemoved { index: 0 });
    let (state, effects) = update(state, Msg::CompetitorsSubmitted);

    assert!(effects.is_empty());
    match state.view().body {
        StepBody::Competitors(view) => {
            assert_eq!(view.error, Some(WizardError::EmptyCompetitorList.to_string()));
            assert!(!view.loading);
        }
        other => panic!("unexpected body {other:?}"),
    }
}

#[test]
fn submit_sends_the_full_local_list() {
    let state = at_competitors(vec![company("Acme")]);
    let (state, _) = update(state, Msg::CompetitorAdded);
    let (_state, effects) = update(state, Msg::CompetitorsSubmitted);

    assert_eq!(
        effects,
        vec![Effect::ResolveAppIds {
            companies: vec![company("Acme"), company("New Company")],
        }]
    );
}

#[test]
fn server_list_replaces_local_edits() {
    let state = at_competitors(vec![company("Acme")]);
    let (state, _) = update(
        state,
        Msg::CompetitorEdited {
            index: 0,
            field: CompanyField::Website,
            value: "https://local-only.example".into(),
        },
    );
    let (state, _) = update(state, Msg::CompetitorsSubmitted);

    let from_server = vec![Company {
        company_name: Some("Acme".into()),
        android_id: Some("com.acme.app".into()),
        apple_id: Some("123456789".into()),
        ..Company::default()
    }];
    let (state, _) = update(state, Msg::AppIdsResolved(Ok(from_server.clone())));

    assert_eq!(
        state.wizard(),
        &WizardState::AppIds {
            competitors: from_server
        }
    );
}

#[test]
fn resolve_failure_keeps_edits_and_reports() {
    let state = at_competitors(vec![company("Acme")]);
    let (state, _) = update(state, Msg::CompetitorsSubmitted);
    let (state, effects) = update(
        state,
        Msg::AppIdsResolved(Err(ApiFailure::Network("connection refused".into()))),
    );

    assert!(effects.is_empty());
    assert_eq!(state.wizard().step(), 2);
    match state.view().body {
        StepBody::Competitors(view) => {
            assert_eq!(view.error, Some(WizardError::ResolveFailed.to_string()));
            assert_eq!(view.rows.len(), 1);
        }
        other => panic!("unexpected body {other:?}"),
    }
}
