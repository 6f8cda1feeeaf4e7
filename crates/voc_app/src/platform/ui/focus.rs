//! Focusable elements of each step, derived from the view model.
use voc_core::{AppViewModel, ResultsView, StepBody};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    WebsiteUrl,
    AnalyzeButton,
    CompetitorName(usize),
    CompetitorWebsite(usize),
    AddCompetitor,
    ConfirmCompetitors,
    AndroidId(usize),
    AppleId(usize),
    StartScraping,
    ProcessData,
    DimensionName(usize),
    DimensionDescription(usize),
    DimensionKeywords(usize),
    SubmitDimensions,
    Reset,
}

/// Tab order for the current screen.
pub fn focus_targets(view: &AppViewModel) -> Vec<FocusTarget> {
    match &view.body {
        StepBody::Website(_) => vec![FocusTarget::WebsiteUrl, FocusTarget::AnalyzeButton],
        StepBody::Competitors(competitors) => (0..competitors.rows.len())
            .flat_map(|i| [FocusTarget::CompetitorName(i), FocusTarget::CompetitorWebsite(i)])
            .chain([FocusTarget::AddCompetitor, FocusTarget::ConfirmCompetitors])
            .collect(),
        StepBody::AppIds(app_ids) => (0..app_ids.rows.len())
            .flat_map(|i| [FocusTarget::AndroidId(i), FocusTarget::AppleId(i)])
            .chain([FocusTarget::StartScraping])
            .collect(),
        StepBody::Results(ResultsView::Polling { .. }) => Vec::new(),
        StepBody::Results(ResultsView::Failed { .. } | ResultsView::FinalSuccess) => {
            vec![FocusTarget::Reset]
        }
        StepBody::Results(ResultsView::Completed(completed)) => {
            if completed.show_process_action {
                vec![FocusTarget::ProcessData]
            } else if completed.dimensions.is_empty() {
                Vec::new()
            } else {
                (0..completed.dimensions.len())
                    .flat_map(|i| {
                        [
                            FocusTarget::DimensionName(i),
                            FocusTarget::DimensionDescription(i),
                            FocusTarget::DimensionKeywords(i),
                        ]
                    })
                    .chain([FocusTarget::SubmitDimensions])
                    .collect()
            }
        }
    }
}

/// Current text of an editable field, `None` for buttons or stale targets.
pub fn field_value(view: &AppViewModel, target: FocusTarget) -> Option<String> {
    match (&view.body, target) {
        (StepBody::Website(website), FocusTarget::WebsiteUrl) => Some(website.url.clone()),
        (StepBody::Competitors(c), FocusTarget::CompetitorName(i)) => {
            c.rows.get(i).map(|row| row.company_name.clone())
        }
        (StepBody::Competitors(c), FocusTarget::CompetitorWebsite(i)) => {
            c.rows.get(i).map(|row| row.website.clone())
        }
        (StepBody::AppIds(a), FocusTarget::AndroidId(i)) => {
            a.rows.get(i).map(|row| row.android_id.clone())
        }
        (StepBody::AppIds(a), FocusTarget::AppleId(i)) => {
            a.rows.get(i).map(|row| row.apple_id.clone())
        }
        (StepBody::Results(ResultsView::Completed(c)), FocusTarget::DimensionName(i)) => {
            c.dimensions.get(i).map(|row| row.dimension.clone())
        }
        (StepBody::Results(ResultsView::Completed(c)), FocusTarget::DimensionDescription(i)) => {
            c.dimensions.get(i).map(|row| row.description.clone())
        }
        (StepBody::Results(ResultsView::Completed(c)), FocusTarget::DimensionKeywords(i)) => {
            c.dimensions.get(i).map(|row| row.keywords.clone())
        }
        _ => None,
    }
}
