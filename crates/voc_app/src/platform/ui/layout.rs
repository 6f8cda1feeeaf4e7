use ratatui::layout::{Constraint, Layout, Rect};

pub const MAX_CONTENT_WIDTH: u16 = 84;
pub const TITLE_HEIGHT: u16 = 3;
pub const STEPPER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;

/// Screen regions, top to bottom. The stepper only exists for steps 1-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub stepper: Option<Rect>,
    pub body: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn split(area: Rect, with_stepper: bool) -> Self {
        let column = centered_column(area, MAX_CONTENT_WIDTH);
        let stepper_height = if with_stepper { STEPPER_HEIGHT } else { 0 };
        let [title, stepper, body, footer] = Layout::vertical([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(stepper_height),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(column);
        Self {
            title,
            stepper: with_stepper.then_some(stepper),
            body,
            footer,
        }
    }
}

pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Scroll needed to keep `focus_line` inside a viewport of `visible` lines.
pub fn scroll_offset(focus_line: Option<usize>, visible: u16) -> u16 {
    let Some(line) = focus_line else {
        return 0;
    };
    let visible = usize::from(visible.max(1));
    let offset = (line + 1).saturating_sub(visible);
    u16::try_from(offset).unwrap_or(u16::MAX)
}
