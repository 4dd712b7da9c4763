//! Screen layout and rendering
//!
//! ```text
//!  P H O C U S
//! ┌──────────────────────────────────┐
//! │12:00:01 ✓ Blocked: example.com   │
//! └──────────────────────────────────┘
//! ┌──────────────────────────────────┐
//! │> Enter domain to block ...       │
//! └──────────────────────────────────┘
//! (enter to block · esc to quit)
//! ```

use super::colors::Theme;
use super::messages::MessageKind;
use super::state::UiState;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub const WAITING_TEXT: &str = "Waiting for domains to block...";
pub const HELP_TEXT: &str = "(enter to block · esc to quit)";
const PROMPT: &str = "> ";

/// Draw the whole screen
pub fn draw(frame: &mut Frame, state: &UiState, theme: &Theme) {
    let [title, log, input, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_title(frame, title, state, theme);
    draw_log(frame, log, state, theme);
    draw_input(frame, input, state, theme);
    frame.render_widget(Paragraph::new(Span::styled(HELP_TEXT, theme.subtle())), help);
}

fn draw_title(frame: &mut Frame, area: Rect, state: &UiState, theme: &Theme) {
    let title = Line::from(Span::styled(format!(" {} ", state.title), theme.title()));
    frame.render_widget(Paragraph::new(title), area);
}

fn draw_log(frame: &mut Frame, area: Rect, state: &UiState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.subtle());
    let height = block.inner(area).height as usize;

    let lines: Vec<Line> = if state.log.is_empty() {
        vec![Line::from(Span::styled(WAITING_TEXT, theme.subtle()))]
    } else {
        state
            .log
            .visible(height)
            .iter()
            .map(|message| {
                let style = match message.kind {
                    MessageKind::Blocked => theme.success(),
                    MessageKind::Warning => theme.warning(),
                    MessageKind::Error => theme.error(),
                };
                let mut spans = Vec::with_capacity(2);
                if state.timestamps {
                    spans.push(Span::styled(format!("{} ", message.timestamp()), theme.subtle()));
                }
                spans.push(Span::styled(message.text.as_str(), style));
                Line::from(spans)
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_input(frame: &mut Frame, area: Rect, state: &UiState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent());
    let inner = block.inner(area);

    let prompt = Span::styled(PROMPT, theme.accent());
    let content = if state.input.is_empty() {
        Span::styled(state.placeholder.as_str(), theme.subtle())
    } else {
        Span::raw(state.input.value())
    };
    frame.render_widget(Paragraph::new(Line::from(vec![prompt, content])).block(block), area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let offset = Span::raw(PROMPT).width() + Span::raw(state.input.before_cursor()).width();
    let x = inner
        .x
        .saturating_add(offset.min(u16::MAX as usize) as u16)
        .min(inner.right().saturating_sub(1));
    frame.set_cursor_position((x, inner.y));
}
