//! The renderable document handed to the drawing layer each frame.

use super::Tab;
use super::common::TabProjection;

/// Collapsed help line.
pub const HELP_COLLAPSED: &str = "←/a →/d switch tab • h help • q quit";

/// Expanded help, one binding per line.
pub const HELP_EXPANDED: [&str; 5] = [
    "←  / a      previous tab",
    "→  / d      next tab",
    "h           toggle this help",
    "q / Esc     quit",
    "Ctrl-C      quit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLabel {
    pub label: &'static str,
    pub active: bool,
}

/// Dashboard content once terminal dimensions are known.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub tabs: Vec<TabLabel>,
    pub content: TabProjection,
    pub help: Vec<&'static str>,
    /// Most recent sampling error.
    pub error: Option<String>,
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Dimensions unknown: neutral placeholder.
    Loading,
    Ready(Screen),
}

impl Screen {
    pub fn new(
        active: Tab,
        content: TabProjection,
        help_expanded: bool,
        error: Option<String>,
        (width, height): (u16, u16),
    ) -> Self {
        let tabs = Tab::ALL
            .iter()
            .map(|t| TabLabel {
                label: t.label(),
                active: *t == active,
            })
            .collect();
        let help = if help_expanded {
            HELP_EXPANDED.to_vec()
        } else {
            vec![HELP_COLLAPSED]
        };
        Self {
            tabs,
            content,
            help,
            error,
            width,
            height,
        }
    }

    pub fn active_label(&self) -> Option<&'static str> {
        self.tabs.iter().find(|t| t.active).map(|t| t.label)
    }
}
