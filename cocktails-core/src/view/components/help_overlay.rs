//! Help overlay listing every key binding.
use crate::view::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Listing",
        &[
            ("↑↓ / j k", "Move selection"),
            ("PgUp/PgDn", "Move by a page"),
            ("Home/End, g G", "First/last cocktail"),
            ("Enter", "Open details"),
            ("Space / l", "Like or unlike"),
            ("m", "Load the next page now"),
        ],
    ),
    (
        "Filters",
        &[
            ("/", "Search by name"),
            ("a", "Show alcoholic"),
            ("n", "Show non-alcoholic"),
            ("f", "Favorites only"),
        ],
    ),
    (
        "Search box",
        &[
            ("Enter/Esc", "Leave the search box"),
            ("Backspace", "Delete a character"),
            ("Ctrl+U", "Clear the query"),
        ],
    ),
    (
        "Details",
        &[("Esc/Backspace/b", "Back to the list"), ("Space / l", "Like or unlike")],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q", "Quit"), ("Ctrl+C", "Force quit")],
    ),
];

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let overlay_area = Self::centered_rect(60, 80, area);
        frame.render_widget(Clear, overlay_area);

        let mut lines = Vec::new();
        for (title, bindings) in SECTIONS {
            lines.push(Line::from(Span::styled(
                *title,
                Style::default().fg(theme::YELLOW).add_modifier(Modifier::BOLD),
            )));
            for (keys, what) in *bindings {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {keys:<18}"), Style::default().fg(theme::CYAN)),
                    Span::styled(*what, Style::default().fg(theme::FOREGROUND)),
                ]));
            }
            lines.push(Line::from(""));
        }

        let help = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .title_alignment(Alignment::Center)
                    .title_style(theme::title_style())
                    .border_style(Style::default().fg(theme::PURPLE))
                    .style(Style::default().bg(theme::BACKGROUND)),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(help, overlay_area);
    }

    fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
            .flex(Flex::Center)
            .areas(area);
        let [rect] = Layout::horizontal([Constraint::Percentage(percent_x)])
            .flex(Flex::Center)
            .areas(row);
        rect
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}
