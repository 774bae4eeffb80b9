//! Parsers for `/proc` filesystem files.
//!
//! These are pure functions that parse the content of `/proc` files into
//! structured data, testable with plain string inputs.

use std::collections::HashMap;

use crate::model::{CpuTimes, Partition};

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Fields of `/proc/[pid]/stat` used by the dashboard.
#[derive(Debug, Clone, Default)]
pub struct ProcStat {
    pub pid: u32,
    pub comm: String,
    pub state: char,
    pub utime: u64,
    pub stime: u64,
    /// Start time in jiffies after boot.
    pub starttime: u64,
}

/// Parses `/proc/[pid]/stat` content.
///
/// The comm field can contain spaces and parentheses, so it is delimited by
/// the first `(` and the last `)`.
pub fn parse_proc_stat(content: &str) -> Result<ProcStat, ParseError> {
    let content = content.trim();

    let open_paren = content
        .find('(')
        .ok_or_else(|| ParseError::new("missing '(' in stat"))?;
    let close_paren = content
        .rfind(')')
        .ok_or_else(|| ParseError::new("missing ')' in stat"))?;

    if close_paren <= open_paren {
        return Err(ParseError::new("invalid parentheses in stat"));
    }

    let pid: u32 = content[..open_paren]
        .trim()
        .parse()
        .map_err(|_| ParseError::new("invalid pid"))?;

    let comm = content[open_paren + 1..close_paren].to_string();

    let fields: Vec<&str> = content[close_paren + 1..].split_whitespace().collect();
    if fields.len() < 20 {
        return Err(ParseError::new(format!(
            "not enough fields in stat: expected 20+, got {}",
            fields.len()
        )));
    }

    let parse_field_u64 = |idx: usize, name: &str| -> Result<u64, ParseError> {
        fields[idx]
            .parse()
            .map_err(|_| ParseError::new(format!("invalid {}", name)))
    };

    Ok(ProcStat {
        pid,
        comm,
        state: fields[0].chars().next().unwrap_or('?'),
        utime: parse_field_u64(11, "utime")?,
        stime: parse_field_u64(12, "stime")?,
        starttime: parse_field_u64(19, "starttime")?,
    })
}

/// Fields of `/proc/[pid]/status` used by the dashboard.
#[derive(Debug, Clone, Default)]
pub struct ProcStatus {
    /// Resident set size in kB; `None` when the line is absent (kernel threads, zombies).
    pub vm_rss: Option<u64>,
}

/// Parses `/proc/[pid]/status` content.
///
/// Format is `key:\tvalue` pairs, one per line.
pub fn parse_proc_status(content: &str) -> Result<ProcStatus, ParseError> {
    let mut fields: HashMap<&str, &str> = HashMap::new();

    for line in content.lines() {
        if let Some((key, value)) = line.split_once(':') {
            fields.insert(key.trim(), value.trim());
        }
    }

    let vm_rss = match fields.get("VmRSS") {
        Some(value) => Some(
            value
                .split_whitespace()
                .next()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| ParseError::new(format!("invalid VmRSS: {}", value)))?,
        ),
        None => None,
    };

    Ok(ProcStatus { vm_rss })
}

/// Parsed data from `/proc/meminfo`, in kB.
#[derive(Debug, Clone, Default)]
pub struct MemInfo {
    pub mem_total: u64,
    pub mem_free: u64,
    pub mem_available: u64,
    pub buffers: u64,
    pub cached: u64,
    pub s_reclaimable: u64,
}

/// Parses `/proc/meminfo` content.
pub fn parse_meminfo(content: &str) -> Result<MemInfo, ParseError> {
    let mut info = MemInfo::default();
    let mut saw_total = false;

    let parse_kb = |line: &str| -> u64 {
        line.split_whitespace()
            .nth(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    };

    for line in content.lines() {
        if line.starts_with("MemTotal:") {
            info.mem_total = parse_kb(line);
            saw_total = true;
        } else if line.starts_with("MemFree:") {
            info.mem_free = parse_kb(line);
        } else if line.starts_with("MemAvailable:") {
            info.mem_available = parse_kb(line);
        } else if line.starts_with("Buffers:") {
            info.buffers = parse_kb(line);
        } else if line.starts_with("Cached:") {
            info.cached = parse_kb(line);
        } else if line.starts_with("SReclaimable:") {
            info.s_reclaimable = parse_kb(line);
        }
    }

    if !saw_total {
        return Err(ParseError::new("MemTotal missing from meminfo"));
    }

    Ok(info)
}

/// Aggregate data from `/proc/stat`.
#[derive(Debug, Clone, Default)]
pub struct GlobalStat {
    pub cpu: CpuTimes,
    /// Boot time, seconds since epoch.
    pub btime: u64,
}

/// Parses the aggregate `cpu` line and `btime` of `/proc/stat`.
///
/// Per-CPU lines are ignored.
pub fn parse_global_stat(content: &str) -> Result<GlobalStat, ParseError> {
    let mut stat = GlobalStat::default();
    let mut saw_cpu = false;

    for line in content.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.first() {
            Some(&"cpu") => {
                let get_val =
                    |idx: usize| -> u64 { parts.get(idx).and_then(|s| s.parse().ok()).unwrap_or(0) };
                stat.cpu = CpuTimes {
                    user: get_val(1),
                    nice: get_val(2),
                    system: get_val(3),
                    idle: get_val(4),
                    iowait: get_val(5),
                    irq: get_val(6),
                    softirq: get_val(7),
                    steal: get_val(8),
                    guest: get_val(9),
                };
                saw_cpu = true;
            }
            Some(&"btime") => {
                stat.btime = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(0);
            }
            _ => {}
        }
    }

    if !saw_cpu {
        return Err(ParseError::new("aggregate cpu line missing from stat"));
    }

    Ok(stat)
}

/// Kernel-internal filesystems that never represent storage capacity.
const PSEUDO_FILESYSTEMS: &[&str] = &[
    "autofs",
    "binfmt_misc",
    "bpf",
    "cgroup",
    "cgroup2",
    "configfs",
    "debugfs",
    "devpts",
    "devtmpfs",
    "efivarfs",
    "fusectl",
    "hugetlbfs",
    "mqueue",
    "nsfs",
    "proc",
    "pstore",
    "ramfs",
    "rpc_pipefs",
    "securityfs",
    "selinuxfs",
    "sysfs",
    "tmpfs",
    "tracefs",
];

pub fn is_pseudo_filesystem(fs_type: &str) -> bool {
    PSEUDO_FILESYSTEMS.contains(&fs_type)
}

/// Parses `/proc/mounts` into partitions, in file order.
///
/// Octal escapes in mountpoints (`\040` for space) are decoded.
pub fn parse_mounts(content: &str) -> Vec<Partition> {
    content
        .lines()
        .filter_map(|line| {
            // Leading field is the device.
            let mut parts = line.split_whitespace().skip(1);
            let mountpoint = parts.next()?;
            let fs_type = parts.next()?;
            Some(Partition {
                mountpoint: unescape_mount_path(mountpoint),
                fs_type: fs_type.to_string(),
            })
        })
        .collect()
}

fn unescape_mount_path(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\'
            && let Some(digits) = bytes.get(i + 1..i + 4)
            && digits.iter().all(|b| (b'0'..=b'7').contains(b))
        {
            let code = digits.iter().fold(0u32, |acc, b| acc * 8 + u32::from(b - b'0'));
            out.push(code as u8);
            i += 4;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_proc_stat_basic() {
        let content = "1234 (bash) S 1233 1234 1234 34816 1235 4194304 5000 50000 10 20 100 50 200 100 20 0 1 0 100000 25000000 2000 18446744073709551615 0 0 0 0 0 0 65536 3670020 1266777851 0 0 0 17 2 0 0 5 0 0 0 0 0 0 0 0 0 0";
        let stat = parse_proc_stat(content).unwrap();

        assert_eq!(stat.pid, 1234);
        assert_eq!(stat.comm, "bash");
        assert_eq!(stat.state, 'S');
        assert_eq!(stat.utime, 100);
        assert_eq!(stat.stime, 50);
        assert_eq!(stat.starttime, 100000);
    }

    #[test]
    fn test_parse_proc_stat_with_parentheses_in_comm() {
        let content = "5001 (test (1)) S 1 5001 5001 0 -1 4194304 1000 0 0 0 10 5 0 0 20 0 1 0 500100 10000000 1000 18446744073709551615 0 0 0 0 0 0 0 0 0 0 0 0 17 0 0 0 0 0 0 0 0 0 0 0 0 0 0";
        let stat = parse_proc_stat(content).unwrap();

        assert_eq!(stat.pid, 5001);
        assert_eq!(stat.comm, "test (1)");
        assert_eq!(stat.utime, 10);
    }

    #[test]
    fn test_parse_proc_stat_truncated() {
        assert!(parse_proc_stat("1 (init) S 0 1").is_err());
        assert!(parse_proc_stat("garbage").is_err());
        assert!(parse_proc_stat("x (init) S").is_err());
    }

    #[test]
    fn test_parse_proc_status() {
        let content = "Name:\tbash\nPid:\t1234\nVmRSS:\t    8000 kB\n";
        let status = parse_proc_status(content).unwrap();
        assert_eq!(status.vm_rss, Some(8000));
    }

    #[test]
    fn test_parse_proc_status_without_rss() {
        let status = parse_proc_status("Name:\tkthreadd\nPid:\t2\n").unwrap();
        assert_eq!(status.vm_rss, None);
    }

    #[test]
    fn test_parse_proc_status_bad_rss() {
        assert!(parse_proc_status("Name:\tx\nVmRSS:\tlots kB\n").is_err());
    }

    #[test]
    fn test_parse_meminfo() {
        let content = "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapCached:            0 kB
SReclaimable:     256000 kB
";
        let info = parse_meminfo(content).unwrap();

        assert_eq!(info.mem_total, 16384000);
        assert_eq!(info.mem_free, 8192000);
        assert_eq!(info.mem_available, 12000000);
        assert_eq!(info.buffers, 512000);
        assert_eq!(info.cached, 2048000);
        assert_eq!(info.s_reclaimable, 256000);
    }

    #[test]
    fn test_parse_meminfo_requires_total() {
        assert!(parse_meminfo("MemFree: 10 kB\n").is_err());
    }

    #[test]
    fn test_parse_global_stat() {
        let content = "\
cpu  10000 500 3000 80000 1000 200 100 7 3 0
cpu0 2500 125 750 20000 250 50 25 0 0 0
ctxt 500000
btime 1700000000
";
        let stat = parse_global_stat(content).unwrap();

        assert_eq!(stat.cpu.user, 10000);
        assert_eq!(stat.cpu.nice, 500);
        assert_eq!(stat.cpu.system, 3000);
        assert_eq!(stat.cpu.idle, 80000);
        assert_eq!(stat.cpu.iowait, 1000);
        assert_eq!(stat.cpu.irq, 200);
        assert_eq!(stat.cpu.softirq, 100);
        assert_eq!(stat.cpu.steal, 7);
        assert_eq!(stat.cpu.guest, 3);
        assert_eq!(stat.btime, 1700000000);
    }

    #[test]
    fn test_parse_global_stat_without_cpu_line() {
        assert!(parse_global_stat("btime 1\n").is_err());
    }

    #[test]
    fn test_parse_mounts() {
        let content = "\
/dev/sda1 / ext4 rw,relatime 0 0
proc /proc proc rw 0 0
/dev/sdb1 /mnt/my\\040disk xfs rw 0 0
";
        let mounts = parse_mounts(content);
        assert_eq!(mounts.len(), 3);
        assert_eq!(mounts[0].mountpoint, "/");
        assert_eq!(mounts[0].fs_type, "ext4");
        assert_eq!(mounts[2].mountpoint, "/mnt/my disk");
    }

    #[test]
    fn test_pseudo_filesystems() {
        assert!(is_pseudo_filesystem("proc"));
        assert!(is_pseudo_filesystem("tmpfs"));
        assert!(!is_pseudo_filesystem("ext4"));
        assert!(!is_pseudo_filesystem("overlay"));
    }
}
