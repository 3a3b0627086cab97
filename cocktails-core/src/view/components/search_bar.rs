//! src/view/components/search_bar.rs

use crate::{
    model::{ui_state::UIMode, view_filter::ViewFilter},
    view::theme,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub struct SearchBar;

impl SearchBar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, filter: &ViewFilter, mode: UIMode, area: Rect) {
        let focused = mode == UIMode::Search;

        let line = if filter.query.is_empty() && !focused {
            Line::from(Span::styled(
                "press / to search by name",
                Style::default().fg(theme::COMMENT).italic(),
            ))
        } else {
            Line::from(Span::styled(
                filter.query.as_str(),
                Style::default().fg(theme::FOREGROUND),
            ))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .title_style(if focused {
                theme::title_style()
            } else {
                Style::default().fg(theme::COMMENT)
            })
            .border_style(theme::border_style(focused))
            .style(Style::default().bg(theme::BACKGROUND));

        frame.render_widget(Paragraph::new(line).block(block), area);

        if focused && area.width > 2 && area.height > 2 {
            let typed = u16::try_from(filter.query.chars().count()).unwrap_or(u16::MAX);
            let x = area
                .x
                .saturating_add(1)
                .saturating_add(typed)
                .min(area.right().saturating_sub(2));
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}
