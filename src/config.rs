//! Dashboard configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Default refresh interval.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(500);
/// Default number of processes shown.
pub const DEFAULT_PROCESS_LIMIT: usize = 7;
/// Default gauge track width in cells.
pub const DEFAULT_GAUGE_WIDTH: usize = 45;

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroRefreshInterval,
    ZeroProcessLimit,
    ZeroGaugeWidth,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroRefreshInterval => write!(f, "refresh interval must be positive"),
            ConfigError::ZeroProcessLimit => write!(f, "process limit must be at least 1"),
            ConfigError::ZeroGaugeWidth => write!(f, "gauge width must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings shared by the sampler, the projector and the event loop.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub refresh_interval: Duration,
    pub process_limit: usize,
    pub gauge_width: usize,
    /// Include pseudo filesystems in the disk tab.
    pub all_partitions: bool,
    pub proc_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            process_limit: DEFAULT_PROCESS_LIMIT,
            gauge_width: DEFAULT_GAUGE_WIDTH,
            all_partitions: false,
            proc_path: PathBuf::from("/proc"),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_interval.is_zero() {
            return Err(ConfigError::ZeroRefreshInterval);
        }
        if self.process_limit == 0 {
            return Err(ConfigError::ZeroProcessLimit);
        }
        if self.gauge_width == 0 {
            return Err(ConfigError::ZeroGaugeWidth);
        }
        Ok(())
    }
}
