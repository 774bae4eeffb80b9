//! Mock filesystem for testing.
//!
//! Provides `MockFs` and pre-built scenarios for exercising the collector
//! without a real Linux `/proc`.

mod filesystem;
mod scenarios;

pub use filesystem::MockFs;
