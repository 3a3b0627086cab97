//! src/view/components/detail_view.rs
//!
//! Full record of one cocktail. The favorite flag is read live from the
//! store, so toggling it here updates the heart immediately.

use chrono::DateTime;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    model::catalog::CatalogItem,
    view::{icons, theme},
};

pub struct DetailView;

impl DetailView {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, item: &CatalogItem, liked: bool, area: Rect) {
        let label = Style::default().fg(theme::CYAN).bold();
        let value = Style::default().fg(theme::FOREGROUND);

        let field = |name: &'static str, text: String| {
            Line::from(vec![
                Span::styled(format!("{name:<12}"), label),
                Span::styled(text, value),
            ])
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", icons::heart(liked)), theme::favorite_style(liked)),
                Span::styled(item.name.clone(), theme::title_style()),
            ]),
            Line::from(""),
            field("Category", or_dash(&item.category)),
            field("Glass", or_dash(&item.glass)),
            Line::from(vec![
                Span::styled(format!("{:<12}", "Alcoholic"), label),
                Span::styled(
                    if item.alcoholic { "Yes" } else { "No" },
                    theme::alcoholic_badge_style(item.alcoholic),
                ),
            ]),
            field("Image", or_dash(&item.image_url)),
        ];

        if let Some(created) = item.created_at.as_deref() {
            lines.push(field("Added", format_timestamp(created)));
        }
        if let Some(updated) = item.updated_at.as_deref() {
            lines.push(field("Updated", format_timestamp(updated)));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Instructions", label)));
        lines.push(Line::from(Span::styled(or_dash(&item.instructions), value)));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} {} ", icons::COCKTAIL, item.name))
            .title_style(theme::title_style())
            .border_style(theme::border_style(true))
            .style(Style::default().bg(theme::BACKGROUND));

        let paragraph = Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, area);
    }
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new()
    }
}

fn or_dash(text: &str) -> String {
    if text.trim().is_empty() {
        "-".to_string()
    } else {
        text.to_string()
    }
}

/// RFC 3339 timestamps are shown as local-style dates; anything else verbatim.
pub fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
