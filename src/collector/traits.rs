//! Abstractions for filesystem access to enable testing and mocking.
//!
//! The `FileSystem` trait allows the collector to work with both the real
//! `/proc` filesystem on Linux and mock implementations in tests.

use std::io;
use std::path::{Path, PathBuf};

/// Block counts of a mounted filesystem, already scaled to bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FsUsage {
    /// `f_blocks * f_frsize`
    pub total: u64,
    /// `f_bfree * f_frsize` (includes reserved blocks).
    pub free_all: u64,
    /// `f_bavail * f_frsize` (available to unprivileged users).
    pub available: u64,
}

/// Abstraction for filesystem operations.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Lists entries in a directory.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Returns capacity figures of the filesystem mounted at `path`.
    fn statvfs(&self, path: &Path) -> io::Result<FsUsage>;
}

/// Real filesystem implementation that delegates to `std::fs` and `statvfs(3)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path)?;
        let mut paths = Vec::new();
        for entry in entries {
            paths.push(entry?.path());
        }
        Ok(paths)
    }

    fn statvfs(&self, path: &Path) -> io::Result<FsUsage> {
        let stat = nix::sys::statvfs::statvfs(path).map_err(io::Error::from)?;
        let frsize = stat.fragment_size() as u64;
        Ok(FsUsage {
            total: stat.blocks() as u64 * frsize,
            free_all: stat.blocks_free() as u64 * frsize,
            available: stat.blocks_available() as u64 * frsize,
        })
    }
}
