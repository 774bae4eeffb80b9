//! UI-agnostic view model types.
//!
//! These carry fully formatted strings plus a load band tag. The TUI maps the
//! band to a ratatui color; nothing here depends on a rendering framework.

use crate::fmt::{GaugeBar, LoadBand};

/// A single table cell with an optional load band color tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewCell {
    pub text: String,
    /// `None` = default style.
    pub band: Option<LoadBand>,
}

impl ViewCell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            band: None,
        }
    }

    pub fn banded(text: impl Into<String>, band: LoadBand) -> Self {
        Self {
            text: text.into(),
            band: Some(band),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewRow {
    pub cells: Vec<ViewCell>,
}

impl ViewRow {
    pub fn new(cells: Vec<ViewCell>) -> Self {
        Self { cells }
    }

    /// Cell texts, mostly for assertions.
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }
}

/// Complete table ready to be rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableViewModel {
    pub title: String,
    pub headers: Vec<String>,
    /// Minimum column widths in cells.
    pub widths: Vec<u16>,
    pub rows: Vec<ViewRow>,
}

/// Labelled gauge, e.g. `CPU: 12.34%`.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeView {
    pub label: String,
    pub bar: GaugeBar,
}

/// Everything one tab shows below the tab bar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabProjection {
    pub gauge: Option<GaugeView>,
    pub table: TableViewModel,
}
