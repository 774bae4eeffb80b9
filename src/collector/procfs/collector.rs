//! `MetricsProvider` backed by `/proc` and `statvfs`.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::debug;

use super::parser::{
    GlobalStat, ParseError, ProcStat, is_pseudo_filesystem, parse_global_stat, parse_meminfo,
    parse_mounts, parse_proc_stat, parse_proc_status,
};
use crate::collector::traits::FileSystem;
use crate::collector::{MetricsProvider, ProviderError};
use crate::model::{CpuTimes, DiskUsage, MemoryStat, Partition, RawProcess};

/// Clock ticks per second used by `/proc` jiffy counters.
pub const CLK_TCK: u64 = 100;

/// Maps a `/proc/[pid]/stat` state letter to a status name.
pub fn status_name(state: char) -> &'static str {
    match state {
        'R' => "running",
        'S' => "sleep",
        'D' => "disk-sleep",
        'T' | 't' => "stop",
        'Z' => "zombie",
        'X' | 'x' => "dead",
        'I' => "idle",
        'W' => "wait",
        'P' => "parked",
        _ => "unknown",
    }
}

/// Lifetime-average CPU usage of a process in percent.
///
/// `cpu_ticks` is `utime + stime`; `alive_secs` is wall time since start.
pub fn process_cpu_percent(cpu_ticks: u64, alive_secs: f64) -> f64 {
    if alive_secs <= 0.0 {
        return 0.0;
    }
    (cpu_ticks as f64 / CLK_TCK as f64) / alive_secs * 100.0
}

fn system_clock() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// Reads host metrics from `/proc`.
pub struct ProcfsCollector<F: FileSystem> {
    fs: F,
    proc_path: PathBuf,
    all_partitions: bool,
    /// Counters from the previous `cpu_percent` call.
    prev_cpu: Option<CpuTimes>,
    clock: fn() -> f64,
}

impl<F: FileSystem> ProcfsCollector<F> {
    /// Creates a new collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
            all_partitions: false,
            prev_cpu: None,
            clock: system_clock,
        }
    }

    /// Includes pseudo filesystems (proc, sysfs, tmpfs, ...) in `partitions`.
    pub fn with_all_partitions(mut self, all: bool) -> Self {
        self.all_partitions = all;
        self
    }

    /// Replaces the wall clock (seconds since epoch).
    pub fn with_clock(mut self, clock: fn() -> f64) -> Self {
        self.clock = clock;
        self
    }

    fn read(&self, name: impl AsRef<Path>) -> Result<String, ProviderError> {
        Ok(self.fs.read_to_string(&self.proc_path.join(name))?)
    }

    fn global_stat(&self) -> Result<GlobalStat, ProviderError> {
        Ok(parse_global_stat(&self.read("stat")?)?)
    }

    /// Reads one process. Returns `None` when it vanished before its stat was read.
    fn read_process(&self, pid: u32, btime: Option<u64>, now: f64) -> Option<RawProcess> {
        let dir = PathBuf::from(pid.to_string());
        let stat_content = self.read(dir.join("stat")).ok()?;
        let stat: Result<ProcStat, ParseError> = parse_proc_stat(&stat_content);

        let name = match self.read(dir.join("comm")) {
            Ok(comm) => Ok(comm.trim().to_string()),
            Err(e) => stat.clone().map(|s| s.comm).map_err(|_| e),
        };

        let status = stat
            .clone()
            .map(|s| vec![status_name(s.state).to_string()])
            .map_err(ProviderError::from);

        let start_secs = stat.clone().map_err(ProviderError::from).and_then(|s| {
            let btime =
                btime.ok_or_else(|| ProviderError::Unavailable("boot time".to_string()))?;
            Ok(btime as f64 + s.starttime as f64 / CLK_TCK as f64)
        });

        let runtime = match &start_secs {
            Ok(start) => Ok(Duration::from_secs_f64((now - start).max(0.0))),
            Err(e) => Err(ProviderError::Unavailable(format!("start time ({})", e))),
        };

        let cpu_percent = match (&stat, &start_secs) {
            (Ok(s), Ok(start)) => Ok(process_cpu_percent(s.utime + s.stime, now - start)),
            (Err(e), _) => Err(ProviderError::from(e.clone())),
            (_, Err(e)) => Err(ProviderError::Unavailable(format!("start time ({})", e))),
        };

        // Kernel threads and zombies have no VmRSS line: zero resident memory.
        let memory_rss = self
            .read(dir.join("status"))
            .and_then(|content| Ok(parse_proc_status(&content)?))
            .map(|status| status.vm_rss.unwrap_or(0) * 1024);

        Some(RawProcess {
            pid,
            name,
            status,
            runtime,
            memory_rss,
            cpu_percent,
        })
    }
}

impl<F: FileSystem> MetricsProvider for ProcfsCollector<F> {
    fn cpu_percent(&mut self) -> Result<f64, ProviderError> {
        let now = self.global_stat()?.cpu;
        let delta = match self.prev_cpu {
            Some(prev) => CpuTimes {
                user: now.user.saturating_sub(prev.user),
                system: now.system.saturating_sub(prev.system),
                idle: now.idle.saturating_sub(prev.idle),
                nice: now.nice.saturating_sub(prev.nice),
                guest: now.guest.saturating_sub(prev.guest),
                irq: now.irq.saturating_sub(prev.irq),
                softirq: now.softirq.saturating_sub(prev.softirq),
                iowait: now.iowait.saturating_sub(prev.iowait),
                steal: now.steal.saturating_sub(prev.steal),
            },
            // Since-boot average until the next tick.
            None => now,
        };
        self.prev_cpu = Some(now);

        let total = delta.total();
        if total == 0 {
            return Ok(0.0);
        }
        Ok(delta.busy() as f64 / total as f64 * 100.0)
    }

    fn cpu_times(&mut self) -> Result<CpuTimes, ProviderError> {
        Ok(self.global_stat()?.cpu)
    }

    fn memory(&mut self) -> Result<MemoryStat, ProviderError> {
        let info = parse_meminfo(&self.read("meminfo")?)?;

        let total = info.mem_total * 1024;
        let free = info.mem_free * 1024;
        let available = info.mem_available * 1024;
        let buffers = info.buffers * 1024;
        let cached = (info.cached + info.s_reclaimable) * 1024;
        let used = total
            .saturating_sub(free)
            .saturating_sub(buffers)
            .saturating_sub(cached);
        let used_percent = if total == 0 {
            0.0
        } else {
            total.saturating_sub(available) as f64 / total as f64 * 100.0
        };

        Ok(MemoryStat {
            total,
            used,
            available,
            free,
            buffers,
            cached,
            used_percent,
        })
    }

    fn processes(&mut self) -> Result<Vec<RawProcess>, ProviderError> {
        let entries = self.fs.read_dir(&self.proc_path)?;
        let btime = self.global_stat().ok().map(|s| s.btime).filter(|b| *b > 0);
        let now = (self.clock)();

        let mut processes = Vec::new();
        for entry in entries {
            if let Some(name) = entry.file_name().and_then(|n| n.to_str())
                && let Ok(pid) = name.parse::<u32>()
            {
                match self.read_process(pid, btime, now) {
                    Some(process) => processes.push(process),
                    None => debug!(pid, "process vanished during collection"),
                }
            }
        }

        Ok(processes)
    }

    fn partitions(&mut self) -> Result<Vec<Partition>, ProviderError> {
        let mounts = parse_mounts(&self.read("mounts")?);
        Ok(mounts
            .into_iter()
            .filter(|p| self.all_partitions || !is_pseudo_filesystem(&p.fs_type))
            .collect())
    }

    fn disk_usage(&mut self, partition: &Partition) -> Result<DiskUsage, ProviderError> {
        let usage = self.fs.statvfs(Path::new(&partition.mountpoint))?;
        Ok(DiskUsage {
            total: usage.total,
            used: usage.total.saturating_sub(usage.free_all),
            free: usage.available,
        })
    }
}
