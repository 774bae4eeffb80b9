//! Header widget showing tabs and the clock.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::style::Styles;
use crate::view::TabLabel;

/// Renders the tab bar.
pub fn render_header(frame: &mut Frame, area: Rect, tabs: &[TabLabel]) {
    let chunks = Layout::horizontal([
        Constraint::Min(20),    // Tabs
        Constraint::Length(21), // Time
    ])
    .split(area);

    let spans: Vec<Span> = tabs
        .iter()
        .map(|tab| {
            let style = if tab.active {
                Styles::tab_active()
            } else {
                Styles::tab_inactive()
            };
            Span::styled(format!(" {} ", tab.label), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let time = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    frame.render_widget(Paragraph::new(time).style(Styles::header()), chunks[1]);
}
