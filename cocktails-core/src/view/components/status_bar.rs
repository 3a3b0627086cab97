//! src/view/components/status_bar.rs
//!
//! One-line footer: counts and paging progress on the left, the last load
//! error (if any) and key hints for the current context on the right.

use crate::{
    controller::{action_dispatcher::ActionDispatcher, keymap::KeyContext},
    model::app_state::AppState,
    view::theme,
};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, state: &AppState, area: Rect) {
        let mut left = vec![Span::styled(
            format!(" {}", state.status_line()),
            Style::default().fg(theme::FOREGROUND),
        )];

        if state.loader.is_loading() {
            left.push(Span::styled(
                "  loading…",
                Style::default().fg(theme::YELLOW),
            ));
        } else if let Some(err) = state.loader.last_error() {
            left.push(Span::styled(
                format!("  ⚠ {err}"),
                Style::default().fg(theme::ORANGE).bold(),
            ));
        }

        let hints = Self::hints(ActionDispatcher::key_context(state));

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Paragraph::new(Line::from(left))
            .style(theme::base_style())
            .alignment(Alignment::Left)
            .render(layout[0], frame.buffer_mut());

        Paragraph::new(format!("{hints} "))
            .style(Style::default().fg(theme::COMMENT).bg(theme::BACKGROUND))
            .alignment(Alignment::Right)
            .render(layout[1], frame.buffer_mut());
    }

    fn hints(ctx: KeyContext) -> &'static str {
        match ctx {
            KeyContext::Browse => "↑↓ move  ⏎ open  space like  / search  ? help  q quit",
            KeyContext::Search => "type to filter  ⏎/esc done  ctrl+u clear",
            KeyContext::Detail => "esc back  space like  q quit",
            KeyContext::Help => "esc close",
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
