//! Metric sampler: one provider round-trip per tick.
//!
//! The sampler queries the provider in a fixed order (CPU percent, CPU times,
//! memory, processes, disks). Each query is independent; a failure in one
//! category is carried in the [`SampleReport`] and never stops the others.

use std::cmp::Ordering;

use tracing::{error, warn};

use crate::collector::{MetricsProvider, ProviderError};
use crate::model::{
    CpuBreakdown, CpuTimes, DiskEntry, MemoryStat, ProcessEntry, RawProcess, Sample,
};
use crate::trend::{CpuTrends, TrendTracker};

/// Placeholder name for a process whose name could not be read.
pub const UNKNOWN_NAME: &str = "N/A";
/// Placeholder status for a process whose status could not be read.
pub const UNKNOWN_STATUS: &str = "Unknown";

/// Failure of one metric category for one tick.
#[derive(Debug)]
pub enum SampleError {
    CpuPercent(ProviderError),
    CpuTimes(ProviderError),
    Memory(ProviderError),
    Processes(ProviderError),
    Disks(ProviderError),
    /// Partition enumeration succeeded but returned nothing.
    NoDisks,
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleError::CpuPercent(e) => write!(f, "cpu percent: {}", e),
            SampleError::CpuTimes(e) => write!(f, "cpu times: {}", e),
            SampleError::Memory(e) => write!(f, "memory: {}", e),
            SampleError::Processes(e) => write!(f, "processes: {}", e),
            SampleError::Disks(e) => write!(f, "disks: {}", e),
            SampleError::NoDisks => write!(f, "disks: no disks found"),
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SampleError::CpuPercent(e)
            | SampleError::CpuTimes(e)
            | SampleError::Memory(e)
            | SampleError::Processes(e)
            | SampleError::Disks(e) => Some(e),
            SampleError::NoDisks => None,
        }
    }
}

/// Converts raw counters to percentages of their sum.
///
/// A zero sum yields an all-zero breakdown.
pub fn normalize_cpu_times(times: &CpuTimes) -> CpuBreakdown {
    let total = times.total();
    if total == 0 {
        return CpuBreakdown::default();
    }
    let total = total as f64;
    let pct = |v: u64| v as f64 / total * 100.0;
    CpuBreakdown {
        user: pct(times.user),
        system: pct(times.system),
        idle: pct(times.idle),
        nice: pct(times.nice),
        guest: pct(times.guest),
        irq: pct(times.irq),
        softirq: pct(times.softirq),
        iowait: pct(times.iowait),
        steal: pct(times.steal),
    }
}

/// Number of attributes of `raw` that will be shown as placeholders.
fn placeholder_count(raw: &RawProcess) -> usize {
    [
        raw.name.is_err(),
        raw.status.is_err(),
        raw.runtime.is_err(),
        raw.memory_rss.is_err(),
        raw.cpu_percent.is_err(),
    ]
    .into_iter()
    .filter(|failed| *failed)
    .count()
}

/// Applies placeholders for unreadable attributes. The process is always kept.
fn resolve_process(raw: RawProcess) -> ProcessEntry {
    let pid = raw.pid;

    let name = raw.name.unwrap_or_else(|e| {
        warn!(pid, error = %e, "process name unreadable");
        UNKNOWN_NAME.to_string()
    });
    let status = raw.status.unwrap_or_else(|e| {
        warn!(pid, error = %e, "process status unreadable");
        vec![UNKNOWN_STATUS.to_string()]
    });
    let runtime = match raw.runtime {
        Ok(runtime) => Some(runtime),
        Err(e) => {
            warn!(pid, error = %e, "process runtime unreadable");
            None
        }
    };
    let memory_rss = raw.memory_rss.unwrap_or_else(|e| {
        warn!(pid, error = %e, "process memory unreadable");
        0
    });
    let cpu_percent = raw.cpu_percent.unwrap_or_else(|e| {
        warn!(pid, error = %e, "process cpu unreadable");
        0.0
    });

    ProcessEntry {
        pid,
        name,
        status,
        runtime,
        memory_rss,
        cpu_percent,
    }
}

/// Descending by CPU; NaN sorts last.
fn by_cpu_descending(a: &ProcessEntry, b: &ProcessEntry) -> Ordering {
    match (a.cpu_percent.is_nan(), b.cpu_percent.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b
            .cpu_percent
            .partial_cmp(&a.cpu_percent)
            .unwrap_or(Ordering::Equal),
    }
}

/// Per-category results of one tick.
#[derive(Debug)]
pub struct SampleReport {
    pub cpu_total_percent: Result<f64, SampleError>,
    pub cpu_breakdown: Result<CpuBreakdown, SampleError>,
    /// Present only when the breakdown was sampled.
    pub cpu_trends: Option<CpuTrends>,
    pub memory: Result<MemoryStat, SampleError>,
    pub processes: Result<Vec<ProcessEntry>, SampleError>,
    pub disks: Result<Vec<DiskEntry>, SampleError>,
}

impl SampleReport {
    /// Overwrites the categories that succeeded and returns the failures.
    ///
    /// Failed categories leave their previous values in `sample` and `trends`.
    pub fn merge_into(self, sample: &mut Sample, trends: &mut CpuTrends) -> Vec<SampleError> {
        let mut errors = Vec::new();

        match self.cpu_total_percent {
            Ok(v) => sample.cpu_total_percent = v,
            Err(e) => errors.push(e),
        }
        match self.cpu_breakdown {
            Ok(v) => sample.cpu_breakdown = v,
            Err(e) => errors.push(e),
        }
        if let Some(t) = self.cpu_trends {
            *trends = t;
        }
        match self.memory {
            Ok(v) => sample.memory = v,
            Err(e) => errors.push(e),
        }
        match self.processes {
            Ok(v) => sample.processes = v,
            Err(e) => errors.push(e),
        }
        match self.disks {
            Ok(v) => sample.disks = v,
            Err(e) => errors.push(e),
        }

        errors
    }
}

/// Drives a [`MetricsProvider`] and owns the trend state.
pub struct Sampler<P: MetricsProvider> {
    provider: P,
    trends: TrendTracker,
    process_limit: usize,
}

impl<P: MetricsProvider> Sampler<P> {
    pub fn new(provider: P, process_limit: usize) -> Self {
        Self {
            provider,
            trends: TrendTracker::new(),
            process_limit,
        }
    }

    /// Runs every query once.
    pub fn sample(&mut self) -> SampleReport {
        let cpu_total_percent = self
            .provider
            .cpu_percent()
            .map_err(SampleError::CpuPercent);

        let cpu_breakdown = self
            .provider
            .cpu_times()
            .map(|times| normalize_cpu_times(&times))
            .map_err(SampleError::CpuTimes);
        let cpu_trends = cpu_breakdown
            .as_ref()
            .ok()
            .map(|breakdown| self.trends.observe(*breakdown));

        let memory = self.provider.memory().map_err(SampleError::Memory);
        let processes = self.sample_processes();
        let disks = self.sample_disks();

        SampleReport {
            cpu_total_percent,
            cpu_breakdown,
            cpu_trends,
            memory,
            processes,
            disks,
        }
    }

    /// Full enumeration, stable sort by CPU descending, then truncation.
    pub fn sample_processes(&mut self) -> Result<Vec<ProcessEntry>, SampleError> {
        let raw = self.provider.processes().map_err(SampleError::Processes)?;
        let placeholders: usize = raw.iter().map(placeholder_count).sum();
        if placeholders > 0 {
            error!(
                placeholders,
                processes = raw.len(),
                "process attributes replaced with placeholders"
            );
        }
        let mut entries: Vec<ProcessEntry> = raw.into_iter().map(resolve_process).collect();
        entries.sort_by(by_cpu_descending);
        entries.truncate(self.process_limit);
        Ok(entries)
    }

    /// Disks by total capacity, descending.
    ///
    /// Any single usage failure fails the whole category for this tick.
    pub fn sample_disks(&mut self) -> Result<Vec<DiskEntry>, SampleError> {
        let partitions = self.provider.partitions().map_err(SampleError::Disks)?;

        let mut disks = Vec::with_capacity(partitions.len());
        for partition in partitions {
            let usage = self
                .provider
                .disk_usage(&partition)
                .map_err(SampleError::Disks)?;
            disks.push(DiskEntry::new(partition, usage));
        }

        if disks.is_empty() {
            return Err(SampleError::NoDisks);
        }
        disks.sort_by(|a, b| b.total.cmp(&a.total));
        Ok(disks)
    }
}
