use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{LineGauge, Paragraph};
use ratatui::Frame;
use voc_core::{
    AppIdsView, AppViewModel, CompetitorsView, CompletedView, ResultsView, StepBody,
    StepperHeader, WebsiteView,
};

use super::card::{Card, CardBody, Tone};
use super::constants::*;
use super::focus::FocusTarget;
use super::layout::ScreenLayout;

const ACCENT: Color = Color::Green;

pub fn draw(frame: &mut Frame, view: &AppViewModel, focus: Option<FocusTarget>) {
    let layout = ScreenLayout::split(frame.area(), view.header.is_some());

    render_title(frame, layout.title);
    if let (Some(area), Some(header)) = (layout.stepper, &view.header) {
        render_stepper(frame, area, header);
    }

    match &view.body {
        StepBody::Website(website) => {
            Card::titled(WEBSITE_TITLE).render(frame, layout.body, website_body(website, focus))
        }
        StepBody::Competitors(competitors) => Card::titled(COMPETITORS_TITLE).render(
            frame,
            layout.body,
            competitors_body(competitors, focus),
        ),
        StepBody::AppIds(app_ids) => {
            Card::titled(APP_IDS_TITLE).render(frame, layout.body, app_ids_body(app_ids, focus))
        }
        StepBody::Results(results) => render_results(frame, layout.body, results, focus),
    }

    frame.render_widget(
        Paragraph::new(Span::styled(KEY_HINTS, muted())).alignment(Alignment::Center),
        layout.footer,
    );
}

fn render_title(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            APP_TITLE,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(APP_SUBTITLE, muted())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_stepper(frame: &mut Frame, area: Rect, header: &StepperHeader) {
    let mut spans = Vec::new();
    for (i, marker) in header.markers.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ───  ", muted()));
        }
        let style = if marker.reached {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            muted()
        };
        spans.push(Span::styled(format!("({}) {}", marker.number, marker.label), style));
    }
    let markers = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        markers,
    );

    let gauge_area = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(ACCENT))
        .unfilled_style(muted())
        .label("")
        .ratio(f64::from(header.progress_percent) / 100.0);
    frame.render_widget(gauge, gauge_area);
}

fn website_body(view: &WebsiteView, focus: Option<FocusTarget>) -> CardBody {
    let mut body = CardBody::default();
    body.push(label("Website URL"));
    push_field(
        &mut body,
        &view.url,
        "https://example.com",
        focus == Some(FocusTarget::WebsiteUrl),
        view.loading,
    );
    push_error(&mut body, view.error.as_deref());
    body.blank();
    let caption = if view.loading {
        "Analyzing..."
    } else {
        "Analyze Website →"
    };
    push_button(
        &mut body,
        caption,
        focus == Some(FocusTarget::AnalyzeButton),
        view.can_submit,
    );
    body
}

fn competitors_body(view: &CompetitorsView, focus: Option<FocusTarget>) -> CardBody {
    let mut body = CardBody::default();
    body.push(Span::styled(COMPETITORS_INTRO, muted()));
    for (index, row) in view.rows.iter().enumerate() {
        body.blank();
        body.push(Span::styled(
            format!("#{}", row.number),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        push_field(
            &mut body,
            &row.company_name,
            "Company Name",
            focus == Some(FocusTarget::CompetitorName(index)),
            view.loading,
        );
        push_field(
            &mut body,
            &row.website,
            "Website (Optional)",
            focus == Some(FocusTarget::CompetitorWebsite(index)),
            view.loading,
        );
    }
    body.blank();
    push_button(
        &mut body,
        "+ Add Competitor",
        focus == Some(FocusTarget::AddCompetitor),
        !view.loading,
    );
    push_error(&mut body, view.error.as_deref());
    let caption = if view.loading {
        "Submitting..."
    } else {
        "Confirm Competitors →"
    };
    push_button(
        &mut body,
        caption,
        focus == Some(FocusTarget::ConfirmCompetitors),
        !view.loading,
    );
    body
}

fn app_ids_body(view: &AppIdsView, focus: Option<FocusTarget>) -> CardBody {
    let mut body = CardBody::default();
    body.push(Span::styled(APP_IDS_HINT, Style::default().fg(ACCENT)));
    for (index, row) in view.rows.iter().enumerate() {
        body.blank();
        body.push(Span::styled(
            row.company_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        body.push(label("Android App ID"));
        push_field(
            &mut body,
            &row.android_id,
            "com.example.app",
            focus == Some(FocusTarget::AndroidId(index)),
            view.loading,
        );
        body.push(label("Apple App ID"));
        push_field(
            &mut body,
            &row.apple_id,
            "123456789",
            focus == Some(FocusTarget::AppleId(index)),
            view.loading,
        );
    }
    body.blank();
    push_error(&mut body, view.error.as_deref());
    let caption = if view.loading {
        "Starting Job..."
    } else {
        "Start Scraping Reviews"
    };
    push_button(
        &mut body,
        caption,
        focus == Some(FocusTarget::StartScraping),
        !view.loading,
    );
    body
}

fn render_results(
    frame: &mut Frame,
    area: Rect,
    view: &ResultsView,
    focus: Option<FocusTarget>,
) {
    let mut body = CardBody::default();
    let tone = match view {
        ResultsView::Polling {
            job_id,
            attempts,
            max_attempts,
        } => {
            body.push(headline(POLLING_HEADLINE, Color::Reset));
            body.push(Span::styled(POLLING_HINT, muted()));
            body.blank();
            body.push(Span::styled(format!("Job ID: {job_id}"), muted()));
            body.push(Span::styled(
                format!("Status checks: {attempts} / {max_attempts}"),
                muted(),
            ));
            Tone::Neutral
        }
        ResultsView::Failed { reason } => {
            body.push(headline(FAILED_HEADLINE, Color::Red));
            body.push(reason.clone());
            body.blank();
            push_button(&mut body, "Try Again", focus == Some(FocusTarget::Reset), true);
            Tone::Danger
        }
        ResultsView::FinalSuccess => {
            body.push(headline(FINAL_HEADLINE, Color::Green));
            body.push(FINAL_HINT);
            body.blank();
            push_button(
                &mut body,
                "Start New Analysis",
                focus == Some(FocusTarget::Reset),
                true,
            );
            Tone::Success
        }
        ResultsView::Completed(completed) => {
            completed_body(&mut body, completed, focus);
            Tone::Neutral
        }
    };
    Card::new().tone(tone).render(frame, area, body);
}

fn completed_body(body: &mut CardBody, view: &CompletedView, focus: Option<FocusTarget>) {
    body.push(headline(COMPLETED_HEADLINE, Color::Reset));
    body.push(Span::styled(COMPLETED_HINT, muted()));
    if let Some(summary) = &view.summary {
        body.blank();
        body.push(summary.clone());
    }
    if let Some(link) = &view.dashboard_link {
        body.blank();
        body.push(Line::from(vec![
            Span::raw("Open Dashboard Report: "),
            Span::styled(
                link.clone(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    if view.show_process_action {
        body.blank();
        let caption = if view.busy {
            "Processing..."
        } else {
            "Process Extracted Data ⚡"
        };
        push_button(
            body,
            caption,
            focus == Some(FocusTarget::ProcessData),
            !view.busy,
        );
    }

    for (index, row) in view.dimensions.iter().enumerate() {
        body.blank();
        body.push(Span::styled(
            format!("Dimension {}", row.number),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        body.push(label("Dimension"));
        push_field(
            body,
            &row.dimension,
            "",
            focus == Some(FocusTarget::DimensionName(index)),
            view.busy,
        );
        body.push(label("Description"));
        push_field(
            body,
            &row.description,
            "",
            focus == Some(FocusTarget::DimensionDescription(index)),
            view.busy,
        );
        body.push(label("Keywords (Comma Separated)"));
        push_field(
            body,
            &row.keywords,
            "",
            focus == Some(FocusTarget::DimensionKeywords(index)),
            view.busy,
        );
    }

    if !view.dimensions.is_empty() {
        body.blank();
        let caption = if view.busy {
            "Submitting...".to_string()
        } else {
            view.submit_label.clone()
        };
        push_button(
            body,
            caption,
            focus == Some(FocusTarget::SubmitDimensions),
            !view.busy,
        );
    }
    push_error(body, view.error.as_deref());
}

fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn label(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::Gray))
}

fn headline(text: &'static str, color: Color) -> Span<'static> {
    Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

fn push_field(body: &mut CardBody, value: &str, placeholder: &str, focused: bool, disabled: bool) {
    let text = if value.is_empty() && !focused {
        Span::styled(placeholder.to_string(), muted())
    } else if disabled {
        Span::styled(value.to_string(), muted())
    } else {
        Span::raw(value.to_string())
    };
    let marker = if focused { "▸ " } else { "  " };
    let mut spans = vec![Span::styled(marker, Style::default().fg(ACCENT)), Span::raw("[ "), text];
    if focused && !disabled {
        spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
    }
    spans.push(Span::raw(" ]"));
    body.push_focusable(Line::from(spans), focused);
}

fn push_button(body: &mut CardBody, caption: impl Into<String>, focused: bool, enabled: bool) {
    let style = match (focused, enabled) {
        (_, false) => muted(),
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD),
        (false, true) => Style::default().fg(ACCENT),
    };
    let marker = if focused { "▸ " } else { "  " };
    body.push_focusable(
        Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled(format!("[ {} ]", caption.into()), style),
        ]),
        focused,
    );
}

fn push_error(body: &mut CardBody, error: Option<&str>) {
    if let Some(message) = error {
        body.push(Span::styled(message.to_string(), Style::default().fg(Color::Red)));
    }
}
