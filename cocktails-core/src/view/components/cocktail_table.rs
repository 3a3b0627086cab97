//! src/view/components/cocktail_table.rs

use crate::{
    model::app_state::AppState,
    view::{icons, theme},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, HighlightSpacing, Row, Table, TableState},
};

/// Rows taken by the table chrome: two borders and the header.
pub const TABLE_CHROME_ROWS: u16 = 3;

pub struct CocktailTable;

impl CocktailTable {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, state: &AppState, area: Rect) {
        let header = Row::new(vec!["", "Name", "Category", "Type"])
            .style(Style::default().fg(theme::YELLOW).bold());

        let mut rows: Vec<Row> = state
            .visible_items()
            .map(|item| {
                let liked = state.is_favorite(item);
                let badge = if item.alcoholic {
                    "Alcoholic"
                } else {
                    "Non-alcoholic"
                };

                Row::new(vec![
                    Cell::from(icons::heart(liked)).style(theme::favorite_style(liked)),
                    Cell::from(item.name.as_str()),
                    Cell::from(item.category.as_str()).style(Style::default().fg(theme::COMMENT)),
                    Cell::from(badge).style(theme::alcoholic_badge_style(item.alcoholic)),
                ])
                .style(Style::default().fg(theme::FOREGROUND))
            })
            .collect();

        rows.push(Self::sentinel_row(state));

        let widths = [
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(20),
            Constraint::Length(14),
        ];

        // The sentinel row is never selectable.
        let selected = (state.visible_len() > 0).then_some(state.ui.selected);
        let mut table_state = TableState::default()
            .with_offset(state.ui.scroll_offset)
            .with_selected(selected);

        let title = format!(" {} Cocktails ", icons::COCKTAIL);

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_style(theme::title_style())
                    .border_style(theme::border_style(false))
                    .style(Style::default().bg(theme::BACKGROUND)),
            )
            .row_highlight_style(theme::highlight_style())
            .highlight_symbol("▶ ")
            .highlight_spacing(HighlightSpacing::Always);

        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn sentinel_row(state: &AppState) -> Row<'static> {
        let (text, color) = if state.loader.is_loading() {
            ("Loading more…", theme::YELLOW)
        } else if state.loader.is_exhausted() {
            ("End of catalog", theme::COMMENT)
        } else if state.loader.last_error().is_some() {
            ("Could not load more, press m to retry", theme::ORANGE)
        } else {
            ("Scroll for more", theme::COMMENT)
        };

        Row::new(vec![Cell::from(""), Cell::from(text)])
            .style(Style::default().fg(color).italic())
    }
}

impl Default for CocktailTable {
    fn default() -> Self {
        Self::new()
    }
}
