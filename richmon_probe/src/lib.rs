//! Blocking host metrics provider for richmon.
//!
//! Everything here returns raw, unfiltered data; classification and ranking
//! happen on the dashboard side.

pub mod metrics;
pub mod sampler;
pub mod state;
pub mod types;

pub use metrics::SysinfoProvider;
pub use sampler::{cpu_window, MetricsProvider, RawSample};
pub use state::ProbeState;
pub use types::{
    PartitionUsage, ProbeError, ProcessReadError, RawMetrics, RawPartition, RawProcess, UsageError,
};
