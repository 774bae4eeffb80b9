//! Collector for the Linux `/proc` filesystem.

mod collector;
pub mod parser;

pub use collector::{CLK_TCK, ProcfsCollector, process_cpu_percent, status_name};
