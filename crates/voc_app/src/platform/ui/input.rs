//! Key bindings: terminal key events to wizard messages.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use voc_core::{AppViewModel, CompanyField, DimensionField, Msg, StepBody, StoreField};

use super::focus::{field_value, FocusTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    FocusNext,
    FocusPrev,
    Dispatch(Msg),
    /// Start scraping; the caller supplies a fresh job id.
    RequestScraping,
    Ignore,
}

pub fn map_key(key: KeyEvent, view: &AppViewModel, focus: Option<FocusTarget>) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('n') if ctrl => match view.body {
            StepBody::Competitors(_) => KeyAction::Dispatch(Msg::CompetitorAdded),
            _ => KeyAction::Ignore,
        },
        KeyCode::Char('d') if ctrl => match focus {
            Some(FocusTarget::CompetitorName(index) | FocusTarget::CompetitorWebsite(index)) => {
                KeyAction::Dispatch(Msg::CompetitorRemoved { index })
            }
            _ => KeyAction::Ignore,
        },
        KeyCode::Tab | KeyCode::Down => KeyAction::FocusNext,
        KeyCode::BackTab | KeyCode::Up => KeyAction::FocusPrev,
        KeyCode::Enter => focus.map_or(KeyAction::Ignore, activate),
        KeyCode::Backspace => edit(view, focus, |text| {
            text.pop();
        }),
        KeyCode::Char(c) if !ctrl => edit(view, focus, |text| text.push(c)),
        _ => KeyAction::Ignore,
    }
}

/// Enter on a field submits the form it belongs to.
fn activate(target: FocusTarget) -> KeyAction {
    let msg = match target {
        FocusTarget::WebsiteUrl | FocusTarget::AnalyzeButton => Msg::WebsiteSubmitted,
        FocusTarget::CompetitorName(_)
        | FocusTarget::CompetitorWebsite(_)
        | FocusTarget::ConfirmCompetitors => Msg::CompetitorsSubmitted,
        FocusTarget::AddCompetitor => Msg::CompetitorAdded,
        FocusTarget::AndroidId(_) | FocusTarget::AppleId(_) | FocusTarget::StartScraping => {
            return KeyAction::RequestScraping
        }
        FocusTarget::ProcessData => Msg::ProcessDataClicked,
        FocusTarget::DimensionName(_)
        | FocusTarget::DimensionDescription(_)
        | FocusTarget::DimensionKeywords(_)
        | FocusTarget::SubmitDimensions => Msg::DimensionsSubmitted,
        FocusTarget::Reset => Msg::ResetClicked,
    };
    KeyAction::Dispatch(msg)
}

fn edit(
    view: &AppViewModel,
    focus: Option<FocusTarget>,
    apply: impl FnOnce(&mut String),
) -> KeyAction {
    let Some(target) = focus else {
        return KeyAction::Ignore;
    };
    let Some(mut value) = field_value(view, target) else {
        return KeyAction::Ignore;
    };
    apply(&mut value);
    edit_msg(target, value).map_or(KeyAction::Ignore, KeyAction::Dispatch)
}

fn edit_msg(target: FocusTarget, value: String) -> Option<Msg> {
    let msg = match target {
        FocusTarget::WebsiteUrl => Msg::WebsiteInputChanged(value),
        FocusTarget::CompetitorName(index) => Msg::CompetitorEdited {
            index,
            field: CompanyField::Name,
            value,
        },
        FocusTarget::CompetitorWebsite(index) => Msg::CompetitorEdited {
            index,
            field: CompanyField::Website,
            value,
        },
        FocusTarget::AndroidId(index) => Msg::AppIdEdited {
            index,
            field: StoreField::Android,
            value,
        },
        FocusTarget::AppleId(index) => Msg::AppIdEdited {
            index,
            field: StoreField::Apple,
            value,
        },
        FocusTarget::DimensionName(index) => Msg::DimensionEdited {
            index,
            field: DimensionField::Name,
            value,
        },
        FocusTarget::DimensionDescription(index) => Msg::DimensionEdited {
            index,
            field: DimensionField::Description,
            value,
        },
        FocusTarget::DimensionKeywords(index) => Msg::DimensionEdited {
            index,
            field: DimensionField::Keywords,
            value,
        },
        _ => return None,
    };
    Some(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voc_core::{update, AppState, Company};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn state_after(msgs: Vec<Msg>) -> AppState {
        msgs.into_iter()
            .fold(AppState::new(), |state, msg| update(state, msg).0)
    }

    fn competitors_state() -> AppState {
        state_after(vec![
            Msg::WebsiteInputChanged("https://acme.com".into()),
            Msg::WebsiteSubmitted,
            Msg::WebsiteAnalyzed(Ok(vec![Company {
                company_name: Some("Acme".into()),
                ..Company::default()
            }])),
        ])
    }

    #[test]
    fn typing_appends_to_the_focused_field() {
        let view = state_after(vec![Msg::WebsiteInputChanged("https://acme.co".into())]).view();
        assert_eq!(
            map_key(key(KeyCode::Char('m')), &view, Some(FocusTarget::WebsiteUrl)),
            KeyAction::Dispatch(Msg::WebsiteInputChanged("https://acme.com".into()))
        );
        assert_eq!(
            map_key(key(KeyCode::Backspace), &view, Some(FocusTarget::WebsiteUrl)),
            KeyAction::Dispatch(Msg::WebsiteInputChanged("https://acme.c".into()))
        );
    }

    #[test]
    fn typing_on_a_button_does_nothing() {
        let view = AppState::new().view();
        assert_eq!(
            map_key(key(KeyCode::Char('x')), &view, Some(FocusTarget::AnalyzeButton)),
            KeyAction::Ignore
        );
        assert_eq!(map_key(key(KeyCode::Char('x')), &view, None), KeyAction::Ignore);
    }

    #[test]
    fn enter_submits_the_current_form() {
        let view = AppState::new().view();
        assert_eq!(
            map_key(key(KeyCode::Enter), &view, Some(FocusTarget::WebsiteUrl)),
            KeyAction::Dispatch(Msg::WebsiteSubmitted)
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), &view, Some(FocusTarget::StartScraping)),
            KeyAction::RequestScraping
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), &view, Some(FocusTarget::Reset)),
            KeyAction::Dispatch(Msg::ResetClicked)
        );
    }

    #[test]
    fn competitor_shortcuts() {
        let view = competitors_state().view();
        assert_eq!(
            map_key(ctrl('n'), &view, None),
            KeyAction::Dispatch(Msg::CompetitorAdded)
        );
        assert_eq!(
            map_key(ctrl('d'), &view, Some(FocusTarget::CompetitorWebsite(0))),
            KeyAction::Dispatch(Msg::CompetitorRemoved { index: 0 })
        );
        assert_eq!(
            map_key(ctrl('d'), &view, Some(FocusTarget::AddCompetitor)),
            KeyAction::Ignore
        );
        assert_eq!(
            map_key(key(KeyCode::Char('!')), &view, Some(FocusTarget::CompetitorName(0))),
            KeyAction::Dispatch(Msg::CompetitorEdited {
                index: 0,
                field: CompanyField::Name,
                value: "Acme!".into(),
            })
        );
    }

    #[test]
    fn add_shortcut_only_applies_to_competitors() {
        assert_eq!(
            map_key(ctrl('n'), &AppState::new().view(), None),
            KeyAction::Ignore
        );
    }

    #[test]
    fn navigation_and_quit() {
        let view = AppState::new().view();
        assert_eq!(map_key(key(KeyCode::Tab), &view, None), KeyAction::FocusNext);
        assert_eq!(map_key(key(KeyCode::BackTab), &view, None), KeyAction::FocusPrev);
        assert_eq!(map_key(key(KeyCode::Esc), &view, None), KeyAction::Quit);
        assert_eq!(map_key(ctrl('c'), &view, None), KeyAction::Quit);
    }
}
