//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::view::{Document, Screen};

use super::widgets::{
    footer_height, render_error_banner, render_footer, render_gauge, render_header,
    render_loading, render_table,
};

/// Main render function.
pub fn render(frame: &mut Frame, document: &Document) {
    match document {
        Document::Loading => render_loading(frame, frame.area()),
        Document::Ready(screen) => render_screen(frame, screen),
    }
}

fn render_screen(frame: &mut Frame, screen: &Screen) {
    let banner_height = u16::from(screen.error.is_some());
    let gauge_height = if screen.content.gauge.is_some() { 3 } else { 0 };

    let [header, banner, gauge, table, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(banner_height),
        Constraint::Length(gauge_height),
        Constraint::Min(3),
        Constraint::Length(footer_height(&screen.help)),
    ])
    .areas(frame.area());

    render_header(frame, header, &screen.tabs);
    if let Some(message) = &screen.error {
        render_error_banner(frame, banner, message);
    }
    if let Some(g) = &screen.content.gauge {
        render_gauge(frame, gauge, g);
    }
    render_table(frame, table, &screen.content.table);
    render_footer(frame, footer, &screen.help);
}
