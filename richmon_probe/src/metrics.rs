//! Metrics collection using sysinfo.

use std::thread;
use std::time::Duration;
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, MINIMUM_CPU_UPDATE_INTERVAL};
use tracing::{debug, warn};

use crate::sampler::MetricsProvider;
use crate::state::ProbeState;
use crate::types::{
    PartitionUsage, ProbeError, ProcessReadError, RawMetrics, RawPartition, RawProcess, UsageError,
};

#[derive(Clone, Default)]
pub struct SysinfoProvider {
    state: ProbeState,
}

impl SysinfoProvider {
    pub fn new() -> Self {
        Self {
            state: ProbeState::new(),
        }
    }

    pub fn with_state(state: ProbeState) -> Self {
        Self { state }
    }
}

fn process_kind() -> ProcessRefreshKind {
    ProcessRefreshKind::nothing().with_cpu().with_memory()
}

impl MetricsProvider for SysinfoProvider {
    fn sample_metrics(&mut self, cpu_window: Duration) -> Result<RawMetrics, ProbeError> {
        let mut sys = self.state.sys.lock().map_err(|_| ProbeError::Poisoned)?;

        // Two refreshes around the window: cpu% (global and per process) is a delta
        sys.refresh_cpu_usage();
        sys.refresh_processes_specifics(ProcessesToUpdate::All, true, process_kind());
        thread::sleep(cpu_window.max(MINIMUM_CPU_UPDATE_INTERVAL));
        sys.refresh_cpu_usage();
        sys.refresh_processes_specifics(ProcessesToUpdate::All, true, process_kind());
        sys.refresh_memory();

        let cpu_per_core: Vec<f32> = sys.cpus().iter().map(|c| c.cpu_usage()).collect();
        if cpu_per_core.is_empty() {
            return Err(ProbeError::NoCpus);
        }
        let cpu_total = sys.global_cpu_usage();
        let mem_total = sys.total_memory();
        let mem_used = mem_total.saturating_sub(sys.available_memory());
        let mem_percent = if mem_total > 0 {
            (mem_used as f64 / mem_total as f64 * 100.0) as f32
        } else {
            0.0
        };
        drop(sys);

        let (net_bytes_sent, net_bytes_recv) = {
            let mut nets = self.state.networks.lock().map_err(|_| ProbeError::Poisoned)?;
            nets.refresh(true);
            nets.iter().fold((0u64, 0u64), |(tx, rx), (_, data)| {
                (
                    tx.saturating_add(data.total_transmitted()),
                    rx.saturating_add(data.total_received()),
                )
            })
        };

        let load = System::load_average();

        Ok(RawMetrics {
            cpu_total,
            cpu_per_core,
            mem_total,
            mem_used,
            mem_percent,
            net_bytes_sent,
            net_bytes_recv,
            boot_time: System::boot_time(),
            uptime_secs: System::uptime(),
            load_avg: (load.one, load.five, load.fifteen),
            hostname: System::host_name().unwrap_or_else(|| "unknown".into()),
            system: System::name().unwrap_or_else(|| "unknown".into()),
            kernel: System::kernel_version().unwrap_or_default(),
        })
    }

    fn partitions(&mut self) -> Vec<RawPartition> {
        let mut disks = match self.state.disks.lock() {
            Ok(d) => d,
            Err(_) => {
                warn!("disk handle lock poisoned; reporting no partitions");
                return Vec::new();
            }
        };
        disks.refresh(true);
        disks
            .list()
            .iter()
            .map(|d| {
                let total = d.total_space();
                let free = d.available_space();
                // sysinfo reports zero-sized entries for mounts it cannot stat
                let usage = if total == 0 && free == 0 {
                    Err(UsageError::Unavailable)
                } else {
                    Ok(PartitionUsage {
                        total,
                        used: total.saturating_sub(free),
                        free,
                    })
                };
                RawPartition {
                    device: d.name().to_string_lossy().into_owned(),
                    mountpoint: d.mount_point().to_string_lossy().into_owned(),
                    fstype: d.file_system().to_string_lossy().into_owned(),
                    removable: d.is_removable(),
                    usage,
                }
            })
            .collect()
    }

    fn processes(&mut self) -> Vec<Result<RawProcess, ProcessReadError>> {
        let sys = match self.state.sys.lock() {
            Ok(s) => s,
            Err(_) => {
                warn!("system handle lock poisoned; reporting no processes");
                return Vec::new();
            }
        };
        let mem_total = sys.total_memory().max(1) as f64;
        let mut out: Vec<(u32, Result<RawProcess, ProcessReadError>)> = sys
            .processes()
            .values()
            .map(|p| {
                let pid = p.pid().as_u32();
                let name = p.name().to_string_lossy().into_owned();
                if name.is_empty() {
                    return (pid, Err(ProcessReadError::AccessDenied));
                }
                (
                    pid,
                    Ok(RawProcess {
                        pid,
                        name,
                        // summed over cores: one busy core reads 100, two read 200
                        cpu_percent: Some(p.cpu_usage()),
                        memory_percent: Some((p.memory() as f64 / mem_total * 100.0) as f32),
                    }),
                )
            })
            .collect();
        // enumeration order: ascending pid, like walking /proc
        out.sort_by_key(|(pid, _)| *pid);
        debug!(count = out.len(), "enumerated processes");
        out.into_iter().map(|(_, p)| p).collect()
    }
}
