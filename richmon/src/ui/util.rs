//! Small UI helpers: byte sizes, truncation, uptime.

use std::time::Duration;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
const TIB: u64 = 1 << 40;

/// GB with no decimals below 1 TiB, TB with one decimal from there on; keeps card widths fixed.
pub fn humanize_bytes(b: u64) -> String {
    if b >= TIB {
        format!("{:.1} TB", b as f64 / TIB as f64)
    } else {
        format!("{:.0} GB", b as f64 / GIB)
    }
}

pub fn gib_1(b: u64) -> String {
    format!("{:.1} GB", b as f64 / GIB)
}

pub fn mib_1(b: u64) -> String {
    format!("{:.1} MB", b as f64 / (1024.0 * 1024.0))
}

pub fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

pub fn fmt_uptime(d: Duration) -> String {
    let secs = d.as_secs();
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let mins = (secs / 60) % 60;
    format!("{days}d {hours}h {mins}m")
}
