//! UI-agnostic view models.
//!
//! [`projector::project`] turns the latest [`Sample`](crate::model::Sample)
//! into one [`TabProjection`] per tab. The TUI assembles a [`Document`] from
//! the projections and its own state, then maps it to ratatui widgets.

pub mod common;
pub mod document;
pub mod projector;

pub use common::{GaugeView, TabProjection, TableViewModel, ViewCell, ViewRow};
pub use document::{Document, Screen, TabLabel};
pub use projector::{Projections, project};

/// Dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Cpu,
    Memory,
    Processes,
    Disk,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Cpu, Tab::Memory, Tab::Processes, Tab::Disk];

    pub fn index(self) -> usize {
        match self {
            Tab::Cpu => 0,
            Tab::Memory => 1,
            Tab::Processes => 2,
            Tab::Disk => 3,
        }
    }

    /// Tab at `index`, clamped to the last tab.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Cpu => "CPU",
            Tab::Memory => "MEMORY",
            Tab::Processes => "PROCESSES",
            Tab::Disk => "DISK",
        }
    }
}
