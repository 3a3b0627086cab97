//! src/view/ui.rs
//! ============================================================
//! Frame renderer that draws the whole TUI from a borrowed
//! `AppState`. Rendering never mutates state.

use std::time::{Duration, Instant};

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};
use tracing::{instrument, trace};

use crate::{
    model::{app_state::AppState, ui_state::UIOverlay},
    view::{
        components::{
            cocktail_table::{CocktailTable, TABLE_CHROME_ROWS},
            detail_view::DetailView,
            filter_bar::FilterBar,
            help_overlay::HelpOverlay,
            search_bar::SearchBar,
            status_bar::StatusBar,
        },
        icons, theme,
    },
};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub filters: Rect,
    pub body: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn new(screen: Rect) -> Self {
        let [header, search, filters, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(screen);

        Self {
            header,
            search,
            filters,
            body,
            status,
        }
    }

    /// Detail screen uses everything between header and status bar.
    pub fn detail_area(&self) -> Rect {
        Rect {
            height: self.body.bottom() - self.search.y,
            ..self.search
        }
    }
}

/// How many table body rows fit on a screen of this size.
pub fn list_viewport_rows(screen: Rect) -> usize {
    AppLayout::new(screen)
        .body
        .height
        .saturating_sub(TABLE_CHROME_ROWS) as usize
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RenderStats {
    pub frames: u64,
    pub slow: u64,
    pub total: Duration,
}

impl RenderStats {
    pub fn fps(&self) -> f64 {
        if self.frames > 0 && !self.total.is_zero() {
            self.frames as f64 / self.total.as_secs_f64()
        } else {
            0.0
        }
    }
}

#[derive(Debug, Default)]
pub struct UIRenderer {
    stats: RenderStats,
}

impl UIRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    #[instrument(level = "trace", skip_all)]
    pub fn render(&mut self, f: &mut Frame<'_>, state: &AppState) {
        let start = Instant::now();
        let screen = f.area();
        let layout = AppLayout::new(screen);

        f.render_widget(Block::default().style(theme::base_style()), screen);
        self.draw_header(f, state, layout.header);

        match state.screen.detail_item() {
            Some(item) => {
                DetailView::new().render(f, item, state.is_favorite(item), layout.detail_area());
            }
            None => {
                SearchBar::new().render(f, &state.filter, state.ui.mode, layout.search);
                FilterBar::new().render(f, &state.filter, layout.filters);
                CocktailTable::new().render(f, state, layout.body);
            }
        }

        StatusBar::new().render(f, state, layout.status);

        if state.ui.overlay == UIOverlay::Help {
            HelpOverlay::new().render(f, screen);
        }

        let dur = start.elapsed();
        self.stats.total += dur;
        if dur.as_millis() > 16 {
            self.stats.slow += 1;
        }
        self.stats.frames += 1;
        trace!(frame = self.stats.frames, ?dur, "Frame rendered");
    }

    fn draw_header(&self, f: &mut Frame<'_>, state: &AppState, area: Rect) {
        let where_ = if state.screen.is_listing() {
            "Catalog"
        } else {
            "Details"
        };

        let line = Line::from(vec![
            Span::styled(format!(" {} Cocktail Browser ", icons::COCKTAIL), theme::title_style()),
            Span::styled(format!("· {where_}"), Style::default().fg(theme::COMMENT)),
        ]);

        f.render_widget(Paragraph::new(line).style(theme::base_style()), area);
    }
}
