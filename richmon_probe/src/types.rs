//! Raw provider types handed to the snapshot normalizer.
//! Keep this module minimal and stable: it is the provider boundary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct RawMetrics {
    pub cpu_total: f32,
    pub cpu_per_core: Vec<f32>,
    pub mem_total: u64,
    pub mem_used: u64,
    pub mem_percent: f32,
    // cumulative totals across all interfaces
    pub net_bytes_sent: u64,
    pub net_bytes_recv: u64,
    /// Unix seconds.
    pub boot_time: u64,
    pub uptime_secs: u64,
    pub load_avg: (f64, f64, f64),
    pub hostname: String,
    pub system: String,
    pub kernel: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

impl PartitionUsage {
    pub fn percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.used as f64 / self.total as f64 * 100.0) as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("permission denied")]
    PermissionDenied,
    #[error("usage unavailable")]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawPartition {
    pub device: String,
    pub mountpoint: String,
    pub fstype: String,
    pub removable: bool,
    pub usage: Result<PartitionUsage, UsageError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawProcess {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: Option<f32>,
    pub memory_percent: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessReadError {
    #[error("process vanished")]
    NoSuchProcess,
    #[error("access denied")]
    AccessDenied,
    #[error("{0}")]
    Other(String),
}

/// Whole-snapshot failure: the tick has no usable system data.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("provider returned no cpu data")]
    NoCpus,
    #[error("provider state lock poisoned")]
    Poisoned,
    #[error("sampling task failed: {0}")]
    Task(String),
}
