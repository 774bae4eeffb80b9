//! Status/help footer, error banner and loading placeholder.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::style::Styles;

/// Height of the footer for the given help lines.
pub fn footer_height(help: &[&str]) -> u16 {
    help.len().max(1) as u16
}

pub fn render_footer(frame: &mut Frame, area: Rect, help: &[&str]) {
    let lines: Vec<Line> = help
        .iter()
        .map(|l| Line::from(Span::styled(l.to_string(), Styles::dim())))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(format!(" Error: {} ", message)).style(Styles::error_banner());
    frame.render_widget(banner, area);
}

/// Neutral placeholder shown until the terminal size is known.
pub fn render_loading(frame: &mut Frame, area: Rect) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(area);

    let content = vec![
        Line::from("Loading..."),
        Line::from(vec![
            Span::styled("q", Styles::help_key()),
            Span::styled(" quit", Styles::dim()),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        middle,
    );
}
