//! Top-N process selection.

use crate::types::ProcessInfo;

pub const DEFAULT_TOP_N: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcMetric {
    Cpu,
    #[default]
    Memory,
}

impl ProcMetric {
    /// Missing or non-finite readings rank as zero.
    pub fn value(self, p: &ProcessInfo) -> f32 {
        let v = match self {
            ProcMetric::Cpu => p.cpu_percent,
            ProcMetric::Memory => p.memory_percent,
        };
        v.filter(|x| x.is_finite()).unwrap_or(0.0)
    }
}

/// Descending by `metric`, ties keep enumeration order, truncated to `n`.
pub fn top_n_by(processes: &[ProcessInfo], metric: ProcMetric, n: usize) -> Vec<ProcessInfo> {
    let mut ranked: Vec<&ProcessInfo> = processes.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| metric.value(b).total_cmp(&metric.value(a)));
    ranked.into_iter().take(n).cloned().collect()
}
