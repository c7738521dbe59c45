//! Provider contract. All calls block; callers run them off the async runtime.

use once_cell::sync::OnceCell;
use std::time::Duration;

use crate::types::{ProbeError, ProcessReadError, RawMetrics, RawPartition, RawProcess};

const DEFAULT_CPU_WINDOW_MS: u64 = 100;

/// CPU sampling window. Read once from `RICHMON_CPU_WINDOW_MS`.
pub fn cpu_window() -> Duration {
    static WINDOW: OnceCell<Duration> = OnceCell::new();
    *WINDOW.get_or_init(|| {
        let ms = std::env::var("RICHMON_CPU_WINDOW_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_CPU_WINDOW_MS);
        Duration::from_millis(ms)
    })
}

pub trait MetricsProvider: Send {
    /// Whole-system metrics. Blocks for at least `cpu_window` while cpu usage accumulates.
    fn sample_metrics(&mut self, cpu_window: Duration) -> Result<RawMetrics, ProbeError>;

    /// Every mounted partition; per-partition failures are reported inside each entry.
    fn partitions(&mut self) -> Vec<RawPartition>;

    /// Every process; unreadable ones are reported as errors, not dropped.
    fn processes(&mut self) -> Vec<Result<RawProcess, ProcessReadError>>;
}

/// One tick's worth of raw provider output.
#[derive(Debug)]
pub struct RawSample {
    pub metrics: Result<RawMetrics, ProbeError>,
    pub partitions: Vec<RawPartition>,
    pub processes: Vec<Result<RawProcess, ProcessReadError>>,
}

impl RawSample {
    pub fn collect<P: MetricsProvider + ?Sized>(provider: &mut P, cpu_window: Duration) -> Self {
        let metrics = provider.sample_metrics(cpu_window);
        let partitions = provider.partitions();
        let processes = provider.processes();
        Self {
            metrics,
            partitions,
            processes,
        }
    }
}
