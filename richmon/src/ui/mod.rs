//! UI module root: panel builders and the terminal painter.

pub mod cpu;
pub mod disks;
pub mod draw;
pub mod gauge;
pub mod header;
pub mod live;
pub mod processes;
pub mod resources;
pub mod system;
pub mod theme;
pub mod util;

use chrono::{DateTime, Local};

use crate::panel::Panel;
use crate::rank::ProcMetric;
use crate::types::MetricSnapshot;

/// Every visual region the dashboard knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Header,
    SystemInfo,
    Resources,
    CpuCores,
    CpuEqualizer,
    Storage,
    TopMemory,
    TopCpu,
    Live,
}

impl PanelKind {
    pub const ALL: [PanelKind; 9] = [
        PanelKind::Header,
        PanelKind::SystemInfo,
        PanelKind::Resources,
        PanelKind::CpuCores,
        PanelKind::CpuEqualizer,
        PanelKind::Storage,
        PanelKind::TopMemory,
        PanelKind::TopCpu,
        PanelKind::Live,
    ];

    pub fn slot_name(self) -> &'static str {
        match self {
            PanelKind::Header => "header",
            PanelKind::SystemInfo => "system_info",
            PanelKind::Resources => "resources",
            PanelKind::CpuCores => "cpu_cores",
            PanelKind::CpuEqualizer => "cpu_equalizer",
            PanelKind::Storage => "storage",
            PanelKind::TopMemory => "processes",
            PanelKind::TopCpu => "top_cpu",
            PanelKind::Live => "live",
        }
    }

    /// Pure: reads only the tick's snapshot (absent on a failed tick) and the clock.
    pub fn build(self, m: Option<&MetricSnapshot>, now: &DateTime<Local>) -> Panel {
        match self {
            PanelKind::Header => header::build_header(m, now),
            PanelKind::SystemInfo => system::build_system_info(m),
            PanelKind::Resources => resources::build_resources(m),
            PanelKind::CpuCores => cpu::build_cpu_cores(m),
            PanelKind::CpuEqualizer => cpu::build_cpu_equalizer(m),
            PanelKind::Storage => disks::build_storage(m),
            PanelKind::TopMemory => processes::build_processes(m, ProcMetric::Memory),
            PanelKind::TopCpu => processes::build_processes(m, ProcMetric::Cpu),
            PanelKind::Live => live::build_live(m, now),
        }
    }
}
