//! Direction of change of the CPU breakdown between consecutive ticks.

use crate::model::CpuBreakdown;

/// Three-valued direction of a metric relative to the previous tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Trend {
    Increased,
    Decreased,
    #[default]
    Unchanged,
}

impl Trend {
    /// Strict comparison, no tolerance band.
    pub fn between(now: f64, prev: f64) -> Self {
        if now > prev {
            Trend::Increased
        } else if now < prev {
            Trend::Decreased
        } else {
            Trend::Unchanged
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Trend::Increased => "↑",
            Trend::Decreased => "↓",
            Trend::Unchanged => "=",
        }
    }
}

/// One trend per breakdown field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuTrends {
    pub user: Trend,
    pub system: Trend,
    pub idle: Trend,
    pub nice: Trend,
    pub guest: Trend,
    pub irq: Trend,
    pub softirq: Trend,
    pub iowait: Trend,
    pub steal: Trend,
}

impl CpuTrends {
    pub fn between(now: &CpuBreakdown, prev: &CpuBreakdown) -> Self {
        Self {
            user: Trend::between(now.user, prev.user),
            system: Trend::between(now.system, prev.system),
            idle: Trend::between(now.idle, prev.idle),
            nice: Trend::between(now.nice, prev.nice),
            guest: Trend::between(now.guest, prev.guest),
            irq: Trend::between(now.irq, prev.irq),
            softirq: Trend::between(now.softirq, prev.softirq),
            iowait: Trend::between(now.iowait, prev.iowait),
            steal: Trend::between(now.steal, prev.steal),
        }
    }
}

/// Retains exactly one previous breakdown.
///
/// Before the first observation the previous value is all-zero, so the first
/// tick reports a rise for every nonzero field.
#[derive(Debug, Default)]
pub struct TrendTracker {
    previous: CpuBreakdown,
}

impl TrendTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares `now` against the retained value, then retains `now`.
    pub fn observe(&mut self, now: CpuBreakdown) -> CpuTrends {
        let trends = CpuTrends::between(&now, &self.previous);
        self.previous = now;
        trends
    }

    pub fn previous(&self) -> &CpuBreakdown {
        &self.previous
    }
}
