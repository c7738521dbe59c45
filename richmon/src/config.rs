//! Environment toggles, read once. The command line only picks the refresh mode.

use once_cell::sync::OnceCell;
use std::path::PathBuf;
use tracing::warn;

use crate::layout::LayoutShape;
use crate::normalize::DriveClassifier;

pub const ENV_LAYOUT: &str = "RICHMON_LAYOUT";
pub const ENV_PRIMARY_DISKS: &str = "RICHMON_PRIMARY_DISKS";
pub const ENV_LOG: &str = "RICHMON_LOG";

pub fn layout_shape() -> LayoutShape {
    static SHAPE: OnceCell<LayoutShape> = OnceCell::new();
    *SHAPE.get_or_init(|| match std::env::var(ENV_LAYOUT) {
        Ok(v) => v.parse().unwrap_or_else(|e| {
            warn!("{e}; using the default layout");
            LayoutShape::default()
        }),
        Err(_) => LayoutShape::default(),
    })
}

/// Comma-separated device list; blank entries are ignored.
pub fn parse_primary_disks(v: &str) -> Vec<String> {
    v.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn drive_classifier() -> DriveClassifier {
    static CLASSIFIER: OnceCell<DriveClassifier> = OnceCell::new();
    CLASSIFIER
        .get_or_init(|| {
            let listed = std::env::var(ENV_PRIMARY_DISKS)
                .map(|v| parse_primary_disks(&v))
                .unwrap_or_default();
            if listed.is_empty() {
                DriveClassifier::default()
            } else {
                DriveClassifier::new(listed)
            }
        })
        .clone()
}

/// Log file path; stderr is owned by the dashboard, so there is no console logging.
pub fn log_path() -> Option<PathBuf> {
    std::env::var_os(ENV_LOG)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
