//! Metrics provider: point-in-time OS counters.
//!
//! The sampler only depends on the [`MetricsProvider`] trait. The Linux
//! implementation, [`ProcfsCollector`], reads `/proc` through the
//! [`FileSystem`] abstraction so it can run against [`MockFs`] in tests.
//!
//! ```text
//!   Sampler ──▶ MetricsProvider (trait)
//!                      │
//!               ProcfsCollector
//!                      │
//!               FileSystem (trait)
//!                 ┌────┴────┐
//!              RealFs     MockFs
//! ```
//!
//! ```
//! use syspulse::collector::{MetricsProvider, MockFs, ProcfsCollector};
//!
//! let mut collector = ProcfsCollector::new(MockFs::typical_system(), "/proc");
//! let memory = collector.memory().unwrap();
//! assert!(memory.total > 0);
//! ```

pub mod mock;
pub mod procfs;
pub mod traits;

pub use mock::MockFs;
pub use procfs::ProcfsCollector;
pub use traits::{FileSystem, FsUsage, RealFs};

use crate::model::{CpuTimes, DiskUsage, MemoryStat, Partition, RawProcess};

/// Error returned by a single provider query.
#[derive(Debug)]
pub enum ProviderError {
    /// I/O error reading a counter source.
    Io(std::io::Error),
    /// Counter source had an unexpected format.
    Parse(String),
    /// The metric is not available on this host.
    Unavailable(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::Io(e) => write!(f, "I/O error: {}", e),
            ProviderError::Parse(msg) => write!(f, "parse error: {}", msg),
            ProviderError::Unavailable(what) => write!(f, "{} unavailable", what),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProviderError {
    fn from(e: std::io::Error) -> Self {
        ProviderError::Io(e)
    }
}

impl From<procfs::parser::ParseError> for ProviderError {
    fn from(e: procfs::parser::ParseError) -> Self {
        ProviderError::Parse(e.message)
    }
}

/// Source of raw OS counters.
///
/// Every query is synchronous and independently fallible.
pub trait MetricsProvider {
    /// Aggregate CPU utilisation in percent.
    fn cpu_percent(&mut self) -> Result<f64, ProviderError>;

    /// Raw cumulative CPU time counters.
    fn cpu_times(&mut self) -> Result<CpuTimes, ProviderError>;

    fn memory(&mut self) -> Result<MemoryStat, ProviderError>;

    /// All readable processes, each with independently fallible attributes.
    fn processes(&mut self) -> Result<Vec<RawProcess>, ProviderError>;

    fn partitions(&mut self) -> Result<Vec<Partition>, ProviderError>;

    fn disk_usage(&mut self, partition: &Partition) -> Result<DiskUsage, ProviderError>;
}
