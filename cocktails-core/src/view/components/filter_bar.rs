//! src/view/components/filter_bar.rs

use crate::{
    model::view_filter::ViewFilter,
    view::{icons, theme},
};
use ratatui::{prelude::*, widgets::Paragraph};

pub struct FilterBar;

impl FilterBar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, filter: &ViewFilter, area: Rect) {
        let mut spans = Vec::with_capacity(9);
        for (key, label, on) in [
            ("a", "Alcoholic", filter.include_alcoholic),
            ("n", "Non-alcoholic", filter.include_non_alcoholic),
            ("f", "Favorites only", filter.favorites_only),
        ] {
            spans.push(Span::styled(
                format!(" {} ", icons::checkbox(on)),
                theme::toggle_style(on),
            ));
            spans.push(Span::styled(
                format!("{label} "),
                Style::default().fg(theme::FOREGROUND),
            ));
            spans.push(Span::styled(
                format!("({key})  "),
                Style::default().fg(theme::COMMENT),
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(theme::base_style())
            .render(area, frame.buffer_mut());
    }
}

impl Default for FilterBar {
    fn default() -> Self {
        Self::new()
    }
}
