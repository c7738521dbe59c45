//! Per-tick snapshot types consumed by the panel builders.

use chrono::{DateTime, Local};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriveType {
    System,
    Internal,
    External,
}

impl DriveType {
    pub fn label(self) -> &'static str {
        match self {
            DriveType::System => "SYSTEM",
            DriveType::Internal => "INTERNAL",
            DriveType::External => "EXTERNAL",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriveInfo {
    pub device: String,
    pub mountpoint: String,
    pub fstype: String,
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f32,
    pub drive_type: DriveType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: Option<f32>,
    pub memory_percent: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MemoryInfo {
    pub total: u64,
    pub used: u64,
    pub percent: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetworkTotals {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadAvg {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

impl LoadAvg {
    pub fn windows(&self) -> [(&'static str, f64); 3] {
        [("1m", self.one), ("5m", self.five), ("15m", self.fifteen)]
    }
}

/// One tick of normalized metrics. Built by the normalizer, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSnapshot {
    pub cpu_total_pct: f32,
    pub cpu_per_core: Vec<f32>,
    pub memory: MemoryInfo,
    pub network: NetworkTotals,
    pub uptime: Duration,
    pub load_avg: LoadAvg,
    pub hostname: String,
    pub system: String,
    pub kernel: String,
    pub boot_time: Option<DateTime<Local>>,
    pub drives: Vec<DriveInfo>,
    /// Enumeration order, already filtered to the memory noise floor.
    pub processes: Vec<ProcessInfo>,
    /// Everything the provider enumerated, before filtering.
    pub process_count: usize,
    pub sampled_at: DateTime<Local>,
}

impl MetricSnapshot {
    /// The drive mounted at `/`, or the first drive when root was filtered out.
    pub fn primary_drive(&self) -> Option<&DriveInfo> {
        self.drives
            .iter()
            .find(|d| d.mountpoint == "/")
            .or_else(|| self.drives.first())
    }
}
