//! Bordered container used for every step body.
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::layout::scroll_offset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Success,
    Danger,
}

impl Tone {
    fn border(self) -> Color {
        match self {
            Tone::Neutral => Color::Gray,
            Tone::Success => Color::Green,
            Tone::Danger => Color::Red,
        }
    }
}

/// Lines of a card plus the line holding the focused element.
#[derive(Debug, Default)]
pub struct CardBody {
    pub lines: Vec<Line<'static>>,
    pub focus_line: Option<usize>,
}

impl CardBody {
    pub fn push(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    pub fn push_focusable(&mut self, line: impl Into<Line<'static>>, focused: bool) {
        if focused {
            self.focus_line = Some(self.lines.len());
        }
        self.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }
}

#[derive(Debug, Default)]
pub struct Card {
    title: Option<&'static str>,
    tone: Tone,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titled(title: &'static str) -> Self {
        Self {
            title: Some(title),
            ..Self::default()
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    fn block(&self) -> Block<'static> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.tone.border()));
        match self.title {
            Some(title) => block.title(Line::from(Span::styled(
                format!(" {title} "),
                Style::default().add_modifier(Modifier::BOLD),
            ))),
            None => block,
        }
    }

    pub fn render(self, frame: &mut Frame, area: Rect, body: CardBody) {
        let block = self.block();
        let inner = block.inner(area);
        let focus_row = body
            .focus_line
            .and_then(|line| body.lines.get(..=line))
            .map(|lines| wrapped_rows(lines, inner.width).saturating_sub(1));
        let scroll = scroll_offset(focus_row, inner.height);
        let widget = Paragraph::new(body.lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(widget, area);
    }
}

/// Rows `lines` occupy once wrapped to `width`.
fn wrapped_rows(lines: &[Line<'static>], width: u16) -> usize {
    Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered(body: CardBody, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| Card::titled("Card").render(frame, frame.area(), body))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn wrapped_text_counts_as_several_rows() {
        let lines = vec![Line::from("alpha beta gamma delta epsilon zeta")];
        assert!(wrapped_rows(&lines, 12) >= 3);
        assert_eq!(wrapped_rows(&lines, 80), 1);
    }

    #[test]
    fn focus_below_wrapped_hint_stays_visible() {
        let mut body = CardBody::default();
        body.push("alpha beta gamma delta epsilon zeta eta theta iota kappa");
        body.push("one");
        body.push("two");
        body.push("three");
        body.push_focusable("FOCUSED", true);

        let text = rendered(body, 20, 8);
        assert!(text.contains("FOCUSED"));
    }
}
