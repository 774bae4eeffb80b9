//! syspulse - terminal dashboard for live host metrics.
//!
//! The library holds everything except argument parsing:
//! - `collector` - metrics provider trait and the `/proc` implementation
//! - `sampler` - per-tick sampling, normalization, ordering and fallbacks
//! - `trend` - CPU breakdown direction of change
//! - `view` - projection of samples into formatted rows and gauges
//! - `tui` - view state machine, event loop and drawing

pub mod collector;
pub mod config;
pub mod fmt;
pub mod logging;
pub mod model;
pub mod sampler;
pub mod trend;
pub mod tui;
pub mod view;
