//! syspulse - live CPU, memory, process and disk dashboard.
//!
//! Usage:
//!   syspulse                      # refresh every 500 ms, top 7 processes
//!   syspulse --interval-ms 2000   # slower refresh
//!   syspulse --processes 15 -v    # more processes, warnings in the log

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tikv_jemallocator::Jemalloc;
use tracing::error;

#[cfg(target_os = "linux")]
use syspulse::collector::RealFs;
#[cfg(not(target_os = "linux"))]
use syspulse::collector::MockFs;
use syspulse::collector::ProcfsCollector;
use syspulse::config::{DEFAULT_GAUGE_WIDTH, DEFAULT_PROCESS_LIMIT, DashboardConfig};
use syspulse::logging::{DEFAULT_LOG_FILE, init_logging};
use syspulse::tui::App;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

/// Terminal dashboard for live host metrics.
#[derive(Parser, Debug)]
#[command(name = "syspulse", about = "Terminal system metrics dashboard")]
struct Args {
    /// Refresh interval in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 500)]
    interval_ms: u64,

    /// Number of processes shown, highest CPU first.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PROCESS_LIMIT)]
    processes: usize,

    /// Gauge track width in cells.
    #[arg(long, value_name = "CELLS", default_value_t = DEFAULT_GAUGE_WIDTH)]
    gauge_width: usize,

    /// Include pseudo filesystems (proc, sysfs, tmpfs, ...) in the disk tab.
    #[arg(long)]
    all_partitions: bool,

    /// Path to /proc filesystem.
    #[arg(long, default_value = "/proc")]
    proc_path: PathBuf,

    /// Log file (appended).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Increase log verbosity (-v warn, -vv info, -vvv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> DashboardConfig {
        DashboardConfig {
            refresh_interval: Duration::from_millis(self.interval_ms),
            process_limit: self.processes,
            gauge_width: self.gauge_width,
            all_partitions: self.all_partitions,
            proc_path: self.proc_path.clone(),
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, &args.log_file);

    let config = args.config();
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    #[cfg(target_os = "linux")]
    let fs = RealFs::new();
    #[cfg(not(target_os = "linux"))]
    let fs = MockFs::typical_system();

    let collector =
        ProcfsCollector::new(fs, &config.proc_path).with_all_partitions(config.all_partitions);
    let app = App::new(collector, config);

    if let Err(e) = app.run() {
        error!(error = %e, "terminal failure");
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
