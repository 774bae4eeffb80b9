//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::fmt::LoadBand;

/// Color palette.
pub struct Theme;

impl Theme {
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;
    pub const HEADER_BG: Color = Color::Blue;

    pub const TAB_ACTIVE: Color = Color::Cyan;
    pub const TAB_INACTIVE: Color = Color::DarkGray;

    pub const BAND_LOW: Color = Color::Green;
    pub const BAND_MODERATE: Color = Color::Yellow;
    pub const BAND_HIGH: Color = Color::LightRed;
    pub const BAND_CRITICAL: Color = Color::Red;

    pub const ERROR_BG: Color = Color::Red;
    pub const BORDER: Color = Color::Cyan;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    pub fn default() -> Style {
        Style::default().fg(Theme::FG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::TAB_ACTIVE)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::TAB_INACTIVE)
    }

    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    pub fn border() -> Style {
        Style::default().fg(Theme::BORDER)
    }

    pub fn error_banner() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Theme::ERROR_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Help key highlight.
    pub fn help_key() -> Style {
        Style::default().fg(Color::Yellow)
    }

    /// Foreground color for a load band.
    pub fn band(band: LoadBand) -> Style {
        let color = match band {
            LoadBand::Low => Theme::BAND_LOW,
            LoadBand::Moderate => Theme::BAND_MODERATE,
            LoadBand::High => Theme::BAND_HIGH,
            LoadBand::Critical => Theme::BAND_CRITICAL,
        };
        Style::default().fg(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_colors_are_distinct() {
        let colors: Vec<Option<Color>> = [
            LoadBand::Low,
            LoadBand::Moderate,
            LoadBand::High,
            LoadBand::Critical,
        ]
        .iter()
        .map(|b| Styles::band(*b).fg)
        .collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
