//! Formatting helpers for dashboard cells and gauges.
//!
//! All functions here are pure: no ratatui styles, no layout. Colors are
//! expressed as a [`LoadBand`] which the TUI maps to concrete styles.

use std::time::Duration;

const KB: u64 = 1024;
const MB: u64 = 1024 * 1024;
const GB: u64 = 1024 * 1024 * 1024;

/// Format a byte count using the largest of GB/MB/KB/B that is at least one unit.
///
/// `500` → `"500 B"`, `2048` → `"2.00 KB"`, `5_242_880` → `"5.00 MB"`.
pub fn format_bytes(bytes: u64) -> String {
    let f = bytes as f64;
    if bytes >= GB {
        format!("{:.2} GB", f / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", f / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", f / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a percentage with two decimals: `"12.50%"`.
pub fn format_percent(percent: f64) -> String {
    format!("{:.2}%", percent)
}

/// Format a runtime truncated to whole seconds: `"45s"`, `"3m5s"`, `"2h0m7s"`.
pub fn format_runtime(runtime: Duration) -> String {
    let secs = runtime.as_secs();
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{}h{}m{}s", h, m, s)
    } else if m > 0 {
        format!("{}m{}s", m, s)
    } else {
        format!("{}s", s)
    }
}

/// Four fixed load bands with inclusive lower bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadBand {
    /// `< 50%`
    Low,
    /// `50% ..< 75%`
    Moderate,
    /// `75% ..< 90%`
    High,
    /// `>= 90%`
    Critical,
}

impl LoadBand {
    pub fn for_percent(percent: f64) -> Self {
        if percent < 50.0 {
            LoadBand::Low
        } else if percent < 75.0 {
            LoadBand::Moderate
        } else if percent < 90.0 {
            LoadBand::High
        } else {
            LoadBand::Critical
        }
    }
}

/// A fixed-width bar of filled and empty cells.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeBar {
    pub percent: f64,
    pub filled: usize,
    pub empty: usize,
    pub band: LoadBand,
}

impl GaugeBar {
    /// Builds a bar for `percent` over a track of `width` cells.
    ///
    /// Filled cells are `floor(percent / 100 * width)`, clamped to the track.
    pub fn new(percent: f64, width: usize) -> Self {
        let raw = (percent / 100.0 * width as f64).floor();
        let filled = if raw.is_nan() || raw <= 0.0 {
            0
        } else {
            (raw as usize).min(width)
        };
        Self {
            percent,
            filled,
            empty: width - filled,
            band: LoadBand::for_percent(percent),
        }
    }

    pub fn width(&self) -> usize {
        self.filled + self.empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_magnitudes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(2048), "2.00 KB");
        assert_eq!(format_bytes(5_242_880), "5.00 MB");
        assert_eq!(format_bytes(3_221_225_472), "3.00 GB");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(12.345), "12.35%");
        assert_eq!(format_percent(100.0), "100.00%");
    }

    #[test]
    fn test_format_runtime() {
        assert_eq!(format_runtime(Duration::from_millis(45_900)), "45s");
        assert_eq!(format_runtime(Duration::from_secs(185)), "3m5s");
        assert_eq!(format_runtime(Duration::from_secs(7207)), "2h0m7s");
        assert_eq!(format_runtime(Duration::ZERO), "0s");
    }

    #[test]
    fn test_load_band_edges_are_inclusive_lower_bounds() {
        assert_eq!(LoadBand::for_percent(0.0), LoadBand::Low);
        assert_eq!(LoadBand::for_percent(49.99), LoadBand::Low);
        assert_eq!(LoadBand::for_percent(50.0), LoadBand::Moderate);
        assert_eq!(LoadBand::for_percent(74.99), LoadBand::Moderate);
        assert_eq!(LoadBand::for_percent(75.0), LoadBand::High);
        assert_eq!(LoadBand::for_percent(89.99), LoadBand::High);
        assert_eq!(LoadBand::for_percent(90.0), LoadBand::Critical);
        assert_eq!(LoadBand::for_percent(100.0), LoadBand::Critical);
    }

    #[test]
    fn test_gauge_half_of_45_cells() {
        let gauge = GaugeBar::new(50.0, 45);
        assert_eq!(gauge.filled, 22);
        assert_eq!(gauge.empty, 23);
        assert_eq!(gauge.band, LoadBand::Moderate);
    }

    #[test]
    fn test_gauge_clamps_out_of_range() {
        let over = GaugeBar::new(150.0, 45);
        assert_eq!(over.filled, 45);
        assert_eq!(over.empty, 0);

        let under = GaugeBar::new(-5.0, 45);
        assert_eq!(under.filled, 0);
        assert_eq!(under.width(), 45);

        let nan = GaugeBar::new(f64::NAN, 10);
        assert_eq!(nan.filled, 0);
    }

    #[test]
    fn test_gauge_full_and_empty() {
        assert_eq!(GaugeBar::new(100.0, 45).filled, 45);
        assert_eq!(GaugeBar::new(0.0, 45).filled, 0);
        assert_eq!(GaugeBar::new(99.9, 10).filled, 9);
    }
}
