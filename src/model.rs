//! Data model for one refresh tick.
//!
//! Raw readings (`CpuTimes`, `Partition`, `DiskUsage`, `RawProcess`) come from
//! a [`MetricsProvider`](crate::collector::MetricsProvider); the sampler turns
//! them into the normalized, ordered types that make up a [`Sample`].

use std::time::Duration;

use crate::collector::ProviderError;

/// Raw cumulative CPU time counters (jiffies) for the aggregate CPU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuTimes {
    pub user: u64,
    pub system: u64,
    pub idle: u64,
    pub nice: u64,
    pub guest: u64,
    pub irq: u64,
    pub softirq: u64,
    pub iowait: u64,
    pub steal: u64,
}

impl CpuTimes {
    /// Sum of all nine counters.
    pub fn total(&self) -> u64 {
        self.user
            + self.system
            + self.idle
            + self.nice
            + self.guest
            + self.irq
            + self.softirq
            + self.iowait
            + self.steal
    }

    /// Time not spent idle or waiting for I/O.
    pub fn busy(&self) -> u64 {
        self.total().saturating_sub(self.idle + self.iowait)
    }
}

/// CPU time split into percentages of the total.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CpuBreakdown {
    pub user: f64,
    pub system: f64,
    pub idle: f64,
    pub nice: f64,
    pub guest: f64,
    pub irq: f64,
    pub softirq: f64,
    pub iowait: f64,
    pub steal: f64,
}

impl CpuBreakdown {
    /// All nine fields, in declaration order.
    pub fn values(&self) -> [f64; 9] {
        [
            self.user,
            self.system,
            self.idle,
            self.nice,
            self.guest,
            self.irq,
            self.softirq,
            self.iowait,
            self.steal,
        ]
    }

    pub fn sum(&self) -> f64 {
        self.values().iter().sum()
    }
}

/// Memory counters in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemoryStat {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub free: u64,
    pub buffers: u64,
    pub cached: u64,
    pub used_percent: f64,
}

/// A mounted filesystem as listed by the provider, before usage is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub mountpoint: String,
    pub fs_type: String,
}

/// Capacity of one mounted filesystem, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskEntry {
    pub mountpoint: String,
    pub fs_type: String,
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

impl DiskEntry {
    pub fn new(partition: Partition, usage: DiskUsage) -> Self {
        Self {
            mountpoint: partition.mountpoint,
            fs_type: partition.fs_type,
            total: usage.total,
            used: usage.used,
            free: usage.free,
        }
    }
}

/// Per-process reading where every attribute can fail on its own.
#[derive(Debug)]
pub struct RawProcess {
    pub pid: u32,
    pub name: Result<String, ProviderError>,
    pub status: Result<Vec<String>, ProviderError>,
    pub runtime: Result<Duration, ProviderError>,
    pub memory_rss: Result<u64, ProviderError>,
    pub cpu_percent: Result<f64, ProviderError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessEntry {
    pub pid: u32,
    pub name: String,
    /// Simultaneous status flags; `["Unknown"]` when unreadable.
    pub status: Vec<String>,
    /// `None` when the start time could not be read.
    pub runtime: Option<Duration>,
    pub memory_rss: u64,
    pub cpu_percent: f64,
}

/// Immutable snapshot of one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    pub cpu_total_percent: f64,
    pub cpu_breakdown: CpuBreakdown,
    pub memory: MemoryStat,
    pub disks: Vec<DiskEntry>,
    pub processes: Vec<ProcessEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_times_total_and_busy() {
        let times = CpuTimes {
            user: 10,
            system: 5,
            idle: 80,
            nice: 1,
            guest: 0,
            irq: 1,
            softirq: 1,
            iowait: 2,
            steal: 0,
        };
        assert_eq!(times.total(), 100);
        assert_eq!(times.busy(), 18);
    }

    #[test]
    fn test_disk_entry_takes_mount_and_usage() {
        let entry = DiskEntry::new(
            Partition {
                mountpoint: "/".into(),
                fs_type: "ext4".into(),
            },
            DiskUsage {
                total: 100,
                used: 40,
                free: 60,
            },
        );
        assert_eq!(entry.mountpoint, "/");
        assert_eq!(entry.fs_type, "ext4");
        assert_eq!(entry.total, 100);
    }
}
