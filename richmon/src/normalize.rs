//! Raw provider output -> MetricSnapshot: drive filtering, classification and ordering,
//! process noise-floor filtering.

use chrono::{DateTime, Local, TimeZone};
use richmon_probe::{RawMetrics, RawPartition, RawProcess, RawSample};
use std::time::Duration;
use tracing::debug;

use crate::types::{
    DriveInfo, DriveType, LoadAvg, MemoryInfo, MetricSnapshot, NetworkTotals, ProcessInfo,
};

pub const MIN_DRIVE_BYTES: u64 = 100 * 1024 * 1024;
pub const MIN_MEMORY_PERCENT: f32 = 0.1;

const PSEUDO_FSTYPES: &[&str] = &[
    "overlay",
    "tmpfs",
    "devtmpfs",
    "squashfs",
    "proc",
    "sysfs",
    "cgroup",
    "cgroup2",
    "autofs",
    "devpts",
    "debugfs",
    "tracefs",
    "securityfs",
    "pstore",
    "bpf",
    "mqueue",
    "hugetlbfs",
    "fusectl",
    "configfs",
    "ramfs",
    "nsfs",
    "efivarfs",
];

const RESERVED_MOUNTS: &[&str] = &[
    "/dev",
    "/proc",
    "/sys",
    "/run",
    "/snap",
    "/var/lib/snapd",
    "/var/snap",
    "/var/lib/docker",
];

const SYSTEM_MOUNTS: &[&str] = &["/", "/boot", "/boot/efi"];
const REMOVABLE_MARKERS: &[&str] = &["/media/", "/mnt/", "usb", "removable"];
const SECONDARY_DISK_PREFIX: &str = "/dev/sd";

pub const DEFAULT_PRIMARY_DISKS: &[&str] = &["/dev/sda1", "/dev/sda2", "/dev/sda3"];

/// Classifies drives from `(device, mountpoint)` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveClassifier {
    primary_devices: Vec<String>,
}

impl Default for DriveClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY_DISKS.iter().map(|s| s.to_string()))
    }
}

impl DriveClassifier {
    pub fn new<I, S>(primary_devices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            primary_devices: primary_devices.into_iter().map(Into::into).collect(),
        }
    }

    pub fn primary_devices(&self) -> &[String] {
        &self.primary_devices
    }

    pub fn classify(&self, device: &str, mountpoint: &str) -> DriveType {
        if SYSTEM_MOUNTS.contains(&mountpoint) {
            return DriveType::System;
        }
        let mp = mountpoint.to_ascii_lowercase();
        if REMOVABLE_MARKERS.iter().any(|m| mp.contains(m)) {
            return DriveType::External;
        }
        if device.starts_with(SECONDARY_DISK_PREFIX)
            && !self.primary_devices.iter().any(|p| p == device)
        {
            return DriveType::External;
        }
        DriveType::Internal
    }
}

fn under(mountpoint: &str, prefix: &str) -> bool {
    mountpoint == prefix
        || mountpoint
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Pseudo filesystems and reserved system/package mounts never show up as drives.
pub fn is_excluded_mount(fstype: &str, mountpoint: &str) -> bool {
    let fs = fstype.to_ascii_lowercase();
    PSEUDO_FSTYPES.contains(&fs.as_str()) || RESERVED_MOUNTS.iter().any(|p| under(mountpoint, p))
}

fn type_rank(t: DriveType) -> u8 {
    match t {
        DriveType::System => 0,
        DriveType::Internal => 1,
        DriveType::External => 2,
    }
}

/// System first (root first within), then Internal, then External; ties by mountpoint.
pub fn sort_drives(drives: &mut [DriveInfo]) {
    drives.sort_by(|a, b| {
        (type_rank(a.drive_type), a.mountpoint != "/", &a.mountpoint).cmp(&(
            type_rank(b.drive_type),
            b.mountpoint != "/",
            &b.mountpoint,
        ))
    });
}

pub fn normalize_drives(partitions: &[RawPartition], classifier: &DriveClassifier) -> Vec<DriveInfo> {
    let mut drives: Vec<DriveInfo> = partitions
        .iter()
        .filter_map(|p| {
            if is_excluded_mount(&p.fstype, &p.mountpoint) {
                return None;
            }
            let usage = match p.usage {
                Ok(u) => u,
                Err(e) => {
                    debug!(mountpoint = %p.mountpoint, "skipping partition: {e}");
                    return None;
                }
            };
            if usage.total < MIN_DRIVE_BYTES {
                return None;
            }
            let mut drive_type = classifier.classify(&p.device, &p.mountpoint);
            if p.removable && drive_type != DriveType::System {
                drive_type = DriveType::External;
            }
            Some(DriveInfo {
                device: p.device.clone(),
                mountpoint: p.mountpoint.clone(),
                fstype: p.fstype.clone(),
                total: usage.total,
                used: usage.used,
                free: usage.free,
                percent: usage.percent(),
                drive_type,
            })
        })
        .collect();
    sort_drives(&mut drives);
    drives
}

pub fn normalize_processes<'a, I>(processes: I) -> Vec<ProcessInfo>
where
    I: IntoIterator<Item = &'a RawProcess>,
{
    processes
        .into_iter()
        .filter(|p| p.memory_percent.is_some_and(|m| m > MIN_MEMORY_PERCENT))
        .map(|p| ProcessInfo {
            pid: p.pid,
            name: p.name.clone(),
            cpu_percent: p.cpu_percent,
            memory_percent: p.memory_percent,
        })
        .collect()
}

fn boot_time(secs: u64) -> Option<DateTime<Local>> {
    Local.timestamp_opt(i64::try_from(secs).ok()?, 0).single()
}

fn snapshot_from(
    m: &RawMetrics,
    drives: Vec<DriveInfo>,
    processes: Vec<ProcessInfo>,
    process_count: usize,
    sampled_at: DateTime<Local>,
) -> MetricSnapshot {
    MetricSnapshot {
        cpu_total_pct: m.cpu_total,
        cpu_per_core: m.cpu_per_core.clone(),
        memory: MemoryInfo {
            total: m.mem_total,
            used: m.mem_used,
            percent: m.mem_percent,
        },
        network: NetworkTotals {
            bytes_sent: m.net_bytes_sent,
            bytes_recv: m.net_bytes_recv,
        },
        uptime: Duration::from_secs(m.uptime_secs),
        load_avg: LoadAvg {
            one: m.load_avg.0,
            five: m.load_avg.1,
            fifteen: m.load_avg.2,
        },
        hostname: m.hostname.clone(),
        system: m.system.clone(),
        kernel: m.kernel.clone(),
        boot_time: boot_time(m.boot_time),
        drives,
        processes,
        process_count,
        sampled_at,
    }
}

/// `None` when the whole-system sample failed; every panel then renders its error state.
pub fn normalize(
    sample: &RawSample,
    classifier: &DriveClassifier,
    sampled_at: DateTime<Local>,
) -> Option<MetricSnapshot> {
    let metrics = match &sample.metrics {
        Ok(m) => m,
        Err(e) => {
            debug!("whole-snapshot failure: {e}");
            return None;
        }
    };
    let drives = normalize_drives(&sample.partitions, classifier);
    let readable = sample.processes.iter().filter_map(|p| match p {
        Ok(p) => Some(p),
        Err(e) => {
            debug!("skipping process: {e}");
            None
        }
    });
    let processes = normalize_processes(readable);
    Some(snapshot_from(
        metrics,
        drives,
        processes,
        sample.processes.len(),
        sampled_at,
    ))
}
