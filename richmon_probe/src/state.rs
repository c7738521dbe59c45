//! Shared provider state: persistent sysinfo handles.

use std::sync::{Arc, Mutex};
use sysinfo::{Disks, Networks, System};

pub type SharedSystem = Arc<Mutex<System>>;
pub type SharedNetworks = Arc<Mutex<Networks>>;
pub type SharedDisks = Arc<Mutex<Disks>>;

#[derive(Clone)]
pub struct ProbeState {
    // Persistent sysinfo handles; cpu% needs the previous refresh to diff against
    pub sys: SharedSystem,
    pub networks: SharedNetworks,
    pub disks: SharedDisks,
}

impl ProbeState {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        sys.refresh_memory();
        Self {
            sys: Arc::new(Mutex::new(sys)),
            networks: Arc::new(Mutex::new(Networks::new_with_refreshed_list())),
            disks: Arc::new(Mutex::new(Disks::new_with_refreshed_list())),
        }
    }
}

impl Default for ProbeState {
    fn default() -> Self {
        Self::new()
    }
}
