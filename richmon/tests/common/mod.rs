//! Shared fixtures: a crafted snapshot, a scripted provider and a recording renderer.
#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use richmon::layout::Composer;
use richmon::panel::Panel;
use richmon::render::{RenderError, Renderer};
use richmon::shutdown::Shutdown;
use richmon::types::{
    DriveInfo, DriveType, LoadAvg, MemoryInfo, MetricSnapshot, NetworkTotals, ProcessInfo,
};
use richmon_probe::{
    MetricsProvider, PartitionUsage, ProbeError, ProcessReadError, RawMetrics, RawPartition,
    RawProcess, UsageError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const GIB: u64 = 1024 * 1024 * 1024;

pub fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 3, 9, h, m, s)
        .earliest()
        .expect("valid local time")
}

pub fn drive(device: &str, mountpoint: &str, drive_type: DriveType, percent: f32) -> DriveInfo {
    let total = 500 * GIB;
    let used = (total as f64 * percent as f64 / 100.0) as u64;
    DriveInfo {
        device: device.into(),
        mountpoint: mountpoint.into(),
        fstype: "ext4".into(),
        total,
        used,
        free: total - used,
        percent,
        drive_type,
    }
}

pub fn process(pid: u32, name: &str, cpu: f32, mem: f32) -> ProcessInfo {
    ProcessInfo {
        pid,
        name: name.into(),
        cpu_percent: Some(cpu),
        memory_percent: Some(mem),
    }
}

pub fn snapshot() -> MetricSnapshot {
    MetricSnapshot {
        cpu_total_pct: 42.0,
        cpu_per_core: vec![12.0, 45.0, 70.0, 95.0],
        memory: MemoryInfo {
            total: 16 * GIB,
            used: 13_670_000_000,
            percent: 85.4,
        },
        network: NetworkTotals {
            bytes_sent: 10 * 1024 * 1024,
            bytes_recv: 3 * 1024 * 1024 / 2,
        },
        uptime: Duration::from_secs(2 * 86_400 + 3 * 3_600 + 4 * 60),
        load_avg: LoadAvg {
            one: 1.0,
            five: 2.5,
            fifteen: 3.6,
        },
        hostname: "bench-01".into(),
        system: "Linux".into(),
        kernel: "6.1.0".into(),
        boot_time: None,
        drives: vec![
            drive("/dev/sda2", "/", DriveType::System, 61.0),
            drive("/dev/sdb1", "/mnt/backup", DriveType::External, 12.5),
        ],
        processes: vec![
            process(10, "sshd", 0.0, 0.4),
            process(42, "postgres", 35.0, 12.0),
            process(77, "firefox-esr-nightly", 60.0, 7.5),
            process(90, "rust-analyzer", 5.0, 9.0),
        ],
        process_count: 212,
        sampled_at: at(14, 30, 5),
    }
}

pub fn raw_metrics() -> RawMetrics {
    RawMetrics {
        cpu_total: 25.0,
        cpu_per_core: vec![20.0, 30.0],
        mem_total: 8 * GIB,
        mem_used: 4 * GIB,
        mem_percent: 50.0,
        net_bytes_sent: 1_000,
        net_bytes_recv: 2_000,
        boot_time: 1_700_000_000,
        uptime_secs: 3_600,
        load_avg: (0.5, 0.4, 0.3),
        hostname: "probe-host".into(),
        system: "Linux".into(),
        kernel: "6.1.0".into(),
    }
}

pub fn partition(device: &str, mountpoint: &str, fstype: &str, total: u64) -> RawPartition {
    RawPartition {
        device: device.into(),
        mountpoint: mountpoint.into(),
        fstype: fstype.into(),
        removable: false,
        usage: Ok(PartitionUsage {
            total,
            used: total / 4,
            free: total - total / 4,
        }),
    }
}

pub fn denied_partition(mountpoint: &str) -> RawPartition {
    RawPartition {
        usage: Err(UsageError::PermissionDenied),
        ..partition("/dev/sdc1", mountpoint, "ext4", 100 * GIB)
    }
}

pub fn raw_process(pid: u32, name: &str, cpu: f32, mem: f32) -> RawProcess {
    RawProcess {
        pid,
        name: name.into(),
        cpu_percent: Some(cpu),
        memory_percent: Some(mem),
    }
}

/// Scripted provider. `fail_on` lists 1-based sample numbers whose whole-system read fails.
#[derive(Clone, Default)]
pub struct FakeProvider {
    pub samples: Arc<AtomicUsize>,
    pub fail_on: Vec<usize>,
    pub fail_always: bool,
    pub delay: Duration,
}

impl MetricsProvider for FakeProvider {
    fn sample_metrics(&mut self, _cpu_window: Duration) -> Result<RawMetrics, ProbeError> {
        let n = self.samples.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        if self.fail_always || self.fail_on.contains(&n) {
            return Err(ProbeError::NoCpus);
        }
        Ok(raw_metrics())
    }

    fn partitions(&mut self) -> Vec<RawPartition> {
        vec![
            partition("/dev/sda2", "/", "ext4", 200 * GIB),
            partition("overlay", "/var/lib/docker/overlay2/x", "overlay", 200 * GIB),
        ]
    }

    fn processes(&mut self) -> Vec<Result<RawProcess, ProcessReadError>> {
        vec![
            Ok(raw_process(1, "init", 0.0, 0.2)),
            Err(ProcessReadError::NoSuchProcess),
            Ok(raw_process(2, "worker", 50.0, 3.0)),
        ]
    }
}

/// Records each painted screen; optionally requests shutdown after `stop_after` paints.
#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Vec<(String, Panel)>>,
    pub finished: Option<Option<String>>,
    pub stop_after: Option<(usize, Shutdown)>,
}

impl Renderer for RecordingRenderer {
    fn paint(&mut self, screen: &Composer) -> Result<(), RenderError> {
        let frame = screen
            .slots()
            .iter()
            .filter_map(|(name, _)| screen.content(name).map(|p| (name.clone(), p.clone())))
            .collect();
        self.frames.push(frame);
        if let Some((n, shutdown)) = &self.stop_after {
            if self.frames.len() >= *n {
                shutdown.trigger();
            }
        }
        Ok(())
    }

    fn finish(&mut self, notice: Option<&str>) -> Result<(), RenderError> {
        self.finished = Some(notice.map(str::to_string));
        Ok(())
    }
}
