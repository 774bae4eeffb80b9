//! Maps a [`TableViewModel`] to a ratatui table.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::tui::style::Styles;
use crate::view::{TableViewModel, ViewCell};

fn cell(view: &ViewCell) -> Cell<'static> {
    let style = view.band.map(Styles::band).unwrap_or_else(Styles::default);
    Cell::from(view.text.clone()).style(style)
}

pub fn render_table(frame: &mut Frame, area: Rect, model: &TableViewModel) {
    let header = Row::new(model.headers.iter().map(|h| Cell::from(h.clone())))
        .style(Styles::table_header());
    let rows = model
        .rows
        .iter()
        .map(|row| Row::new(row.cells.iter().map(cell)));
    let widths = model.widths.iter().map(|w| Constraint::Min(*w));

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(
            Block::default()
                .title(format!(" {} ", model.title))
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        );
    frame.render_widget(table, area);
}
