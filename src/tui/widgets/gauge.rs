//! Fixed-width load gauge.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::style::Styles;
use crate::view::GaugeView;

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Gauge as a single line: `CPU: 12.34% |████░░░░|`.
pub fn gauge_line(gauge: &GaugeView) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} ", gauge.label), Styles::default()),
        Span::styled("|", Styles::dim()),
        Span::styled(FILLED.repeat(gauge.bar.filled), Styles::band(gauge.bar.band)),
        Span::styled(EMPTY.repeat(gauge.bar.empty), Styles::dim()),
        Span::styled("|", Styles::dim()),
    ])
}

pub fn render_gauge(frame: &mut Frame, area: Rect, gauge: &GaugeView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border());
    frame.render_widget(Paragraph::new(gauge_line(gauge)).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt::GaugeBar;

    #[test]
    fn test_gauge_line_cells() {
        let gauge = GaugeView {
            label: "RAM: 50.00%".to_string(),
            bar: GaugeBar::new(50.0, 45),
        };
        let line = gauge_line(&gauge);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();

        assert!(text.starts_with("RAM: 50.00% |"));
        assert!(text.ends_with('|'));
        assert_eq!(text.matches(FILLED).count(), 22);
        assert_eq!(text.matches(EMPTY).count(), 23);
    }
}
