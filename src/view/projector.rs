//! Sample → per-tab rows and gauges.

use super::Tab;
use super::common::{GaugeView, TabProjection, TableViewModel, ViewCell, ViewRow};
use crate::config::DashboardConfig;
use crate::fmt::{GaugeBar, LoadBand, format_bytes, format_percent, format_runtime};
use crate::model::{CpuBreakdown, DiskEntry, MemoryStat, ProcessEntry, Sample};
use crate::trend::{CpuTrends, Trend};

/// One projection per tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projections {
    pub cpu: TabProjection,
    pub memory: TabProjection,
    pub processes: TabProjection,
    pub disk: TabProjection,
}

impl Projections {
    pub fn get(&self, tab: Tab) -> &TabProjection {
        match tab {
            Tab::Cpu => &self.cpu,
            Tab::Memory => &self.memory,
            Tab::Processes => &self.processes,
            Tab::Disk => &self.disk,
        }
    }
}

/// Projects every tab from `sample`.
pub fn project(sample: &Sample, trends: &CpuTrends, config: &DashboardConfig) -> Projections {
    Projections {
        cpu: project_cpu(
            sample.cpu_total_percent,
            &sample.cpu_breakdown,
            trends,
            config.gauge_width,
        ),
        memory: project_memory(&sample.memory, config.gauge_width),
        processes: project_processes(&sample.processes),
        disk: project_disks(&sample.disks),
    }
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|h| h.to_string()).collect()
}

pub fn project_cpu(
    total_percent: f64,
    breakdown: &CpuBreakdown,
    trends: &CpuTrends,
    gauge_width: usize,
) -> TabProjection {
    // Iowait and steal take part in normalization but are not listed.
    let rows: [(&str, f64, Trend); 7] = [
        ("User", breakdown.user, trends.user),
        ("System", breakdown.system, trends.system),
        ("Idle", breakdown.idle, trends.idle),
        ("Nice", breakdown.nice, trends.nice),
        ("Guest", breakdown.guest, trends.guest),
        ("IRQ", breakdown.irq, trends.irq),
        ("SoftIRQ", breakdown.softirq, trends.softirq),
    ];

    TabProjection {
        gauge: Some(GaugeView {
            label: format!("CPU: {}", format_percent(total_percent)),
            bar: GaugeBar::new(total_percent, gauge_width),
        }),
        table: TableViewModel {
            title: "CPU Load".to_string(),
            headers: headers(&["Load", "Value (%)", "Delta"]),
            widths: vec![10, 12, 6],
            rows: rows
                .iter()
                .map(|(name, value, trend)| {
                    ViewRow::new(vec![
                        ViewCell::plain(*name),
                        ViewCell::plain(format_percent(*value)),
                        ViewCell::plain(trend.symbol()),
                    ])
                })
                .collect(),
        },
    }
}

pub fn project_memory(memory: &MemoryStat, gauge_width: usize) -> TabProjection {
    let rows = [
        ("Total", memory.total),
        ("Used", memory.used),
        ("Available", memory.available),
        ("Free", memory.free),
        ("Buffers", memory.buffers),
        ("Cached", memory.cached),
    ];

    TabProjection {
        gauge: Some(GaugeView {
            label: format!("RAM: {}", format_percent(memory.used_percent)),
            bar: GaugeBar::new(memory.used_percent, gauge_width),
        }),
        table: TableViewModel {
            title: "Memory".to_string(),
            headers: headers(&["Type", "Value"]),
            widths: vec![10, 12],
            rows: rows
                .iter()
                .map(|(name, bytes)| {
                    ViewRow::new(vec![
                        ViewCell::plain(*name),
                        ViewCell::plain(format_bytes(*bytes)),
                    ])
                })
                .collect(),
        },
    }
}

pub fn project_processes(processes: &[ProcessEntry]) -> TabProjection {
    let rows = processes
        .iter()
        .map(|p| {
            let runtime = p
                .runtime
                .map(format_runtime)
                .unwrap_or_else(|| "N/A".to_string());
            ViewRow::new(vec![
                ViewCell::plain(p.pid.to_string()),
                ViewCell::plain(p.name.clone()),
                ViewCell::plain(p.status.join(",")),
                ViewCell::plain(runtime),
                ViewCell::plain(format_bytes(p.memory_rss)),
                ViewCell::banded(
                    format_percent(p.cpu_percent),
                    LoadBand::for_percent(p.cpu_percent),
                ),
            ])
        })
        .collect();

    TabProjection {
        gauge: None,
        table: TableViewModel {
            title: "Top Processes".to_string(),
            headers: headers(&["PID", "Name", "Status", "Runtime", "Memory", "CPU"]),
            widths: vec![8, 20, 10, 10, 12, 8],
            rows,
        },
    }
}

pub fn project_disks(disks: &[DiskEntry]) -> TabProjection {
    let rows = disks
        .iter()
        .map(|d| {
            ViewRow::new(vec![
                ViewCell::plain(d.mountpoint.clone()),
                ViewCell::plain(d.fs_type.clone()),
                ViewCell::plain(format_bytes(d.total)),
                ViewCell::plain(format_bytes(d.used)),
                ViewCell::plain(format_bytes(d.free)),
            ])
        })
        .collect();

    TabProjection {
        gauge: None,
        table: TableViewModel {
            title: "Disks".to_string(),
            headers: headers(&["Mountpoint", "FsType", "Total", "Used", "Free"]),
            widths: vec![20, 8, 12, 12, 12],
            rows,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_memory_gauge_at_half() {
        let memory = MemoryStat {
            total: 16_000_000_000,
            used: 8_000_000_000,
            used_percent: 50.0,
            ..MemoryStat::default()
        };
        let projection = project_memory(&memory, 45);
        let gauge = projection.gauge.unwrap();

        assert_eq!(gauge.bar.filled, 22);
        assert_eq!(gauge.bar.empty, 23);
        // 50% is the inclusive lower edge of the moderate band.
        assert_eq!(gauge.bar.band, LoadBand::Moderate);
        assert_eq!(gauge.label, "RAM: 50.00%");

        let rows = &projection.table.rows;
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].texts(), vec!["Total", "14.90 GB"]);
        assert_eq!(rows[1].texts(), vec!["Used", "7.45 GB"]);
        assert_eq!(rows[5].texts(), vec!["Cached", "0 B"]);
    }

    #[test]
    fn test_cpu_rows_and_trends() {
        let breakdown = CpuBreakdown {
            user: 10.0,
            system: 5.0,
            idle: 85.0,
            ..CpuBreakdown::default()
        };
        let trends = CpuTrends {
            user: Trend::Increased,
            idle: Trend::Decreased,
            ..CpuTrends::default()
        };
        let projection = project_cpu(12.5, &breakdown, &trends, 45);

        assert_eq!(projection.gauge.as_ref().unwrap().label, "CPU: 12.50%");
        assert_eq!(projection.gauge.as_ref().unwrap().bar.band, LoadBand::Low);
        let rows = &projection.table.rows;
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].texts(), vec!["User", "10.00%", "↑"]);
        assert_eq!(rows[1].texts(), vec!["System", "5.00%", "="]);
        assert_eq!(rows[2].texts(), vec!["Idle", "85.00%", "↓"]);
        assert_eq!(rows[6].texts()[0], "SoftIRQ");
    }

    #[test]
    fn test_process_rows() {
        let processes = vec![
            ProcessEntry {
                pid: 1001,
                name: "worker".to_string(),
                status: vec!["running".to_string()],
                runtime: Some(Duration::from_secs(185)),
                memory_rss: 2048,
                cpu_percent: 92.0,
            },
            ProcessEntry {
                pid: 7,
                name: "N/A".to_string(),
                status: vec!["sleep".to_string(), "idle".to_string()],
                runtime: None,
                memory_rss: 0,
                cpu_percent: 0.0,
            },
        ];
        let projection = project_processes(&processes);
        assert!(projection.gauge.is_none());
        assert_eq!(projection.table.headers.len(), 6);

        let rows = &projection.table.rows;
        assert_eq!(
            rows[0].texts(),
            vec!["1001", "worker", "running", "3m5s", "2.00 KB", "92.00%"]
        );
        assert_eq!(rows[0].cells[5].band, Some(LoadBand::Critical));
        assert_eq!(
            rows[1].texts(),
            vec!["7", "N/A", "sleep,idle", "N/A", "0 B", "0.00%"]
        );
        assert_eq!(rows[1].cells[5].band, Some(LoadBand::Low));
    }

    #[test]
    fn test_disk_rows_keep_order() {
        let disks = vec![
            DiskEntry {
                mountpoint: "/home".to_string(),
                fs_type: "ext4".to_string(),
                total: 3_221_225_472,
                used: 1024,
                free: 500,
            },
            DiskEntry {
                mountpoint: "/".to_string(),
                fs_type: "xfs".to_string(),
                total: 5_242_880,
                used: 0,
                free: 5_242_880,
            },
        ];
        let projection = project_disks(&disks);
        assert!(projection.gauge.is_none());
        assert_eq!(
            projection.table.rows[0].texts(),
            vec!["/home", "ext4", "3.00 GB", "1.00 KB", "500 B"]
        );
        assert_eq!(projection.table.rows[1].texts()[0], "/");
    }

    #[test]
    fn test_project_all_tabs() {
        let sample = Sample::default();
        let projections = project(&sample, &CpuTrends::default(), &DashboardConfig::default());
        assert_eq!(projections.get(Tab::Cpu).table.rows.len(), 7);
        assert_eq!(projections.get(Tab::Memory).table.rows.len(), 6);
        assert!(projections.get(Tab::Processes).table.rows.is_empty());
        assert!(projections.get(Tab::Disk).table.rows.is_empty());
        assert_eq!(
            projections.get(Tab::Cpu).gauge.as_ref().unwrap().bar.width(),
            45
        );
    }
}
