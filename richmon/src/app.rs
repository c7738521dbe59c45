//! Refresh driver: sample -> normalize -> build panels -> update slots -> repaint.

use chrono::{DateTime, Local};
use richmon_probe::{cpu_window, MetricsProvider, ProbeError, RawSample};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::layout::Composer;
use crate::normalize::{normalize, DriveClassifier};
use crate::panel::Panel;
use crate::render::Renderer;
use crate::shutdown::Shutdown;
use crate::types::MetricSnapshot;

pub const LIVE_INTERVAL: Duration = Duration::from_millis(1000);
pub const FAST_INTERVAL: Duration = Duration::from_millis(500);
pub const STOP_NOTICE: &str = "Monitoring stopped.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// One pass, then exit.
    Once,
    /// Repaint, then sleep this long before the next sample.
    Continuous(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Sampling,
    Building,
    Painted,
    Interrupted,
    Terminal,
}

pub struct App<P, R> {
    provider: P,
    renderer: R,
    composer: Composer,
    classifier: DriveClassifier,
    cpu_window: Duration,
    state: DriverState,
    ticks: u64,
    failed_ticks: u64,
}

impl<P, R> App<P, R>
where
    P: MetricsProvider + Clone + 'static,
    R: Renderer,
{
    pub fn new(provider: P, renderer: R, composer: Composer, classifier: DriveClassifier) -> Self {
        Self {
            provider,
            renderer,
            composer,
            classifier,
            cpu_window: cpu_window(),
            state: DriverState::Idle,
            ticks: 0,
            failed_ticks: 0,
        }
    }

    pub fn with_cpu_window(mut self, window: Duration) -> Self {
        self.cpu_window = window;
        self
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Completed paints.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Paints that showed the error state because the whole sample failed.
    pub fn failed_ticks(&self) -> u64 {
        self.failed_ticks
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn transition(&mut self, next: DriverState) {
        debug!(from = ?self.state, to = ?next, "driver transition");
        self.state = next;
    }

    pub async fn run(&mut self, mode: RunMode, shutdown: &Shutdown) -> anyhow::Result<()> {
        let res = self.event_loop(mode, shutdown).await;
        let notice = (self.state == DriverState::Interrupted).then_some(STOP_NOTICE);
        self.transition(DriverState::Terminal);
        let finished = self.renderer.finish(notice);
        res?;
        finished?;
        Ok(())
    }

    async fn event_loop(&mut self, mode: RunMode, shutdown: &Shutdown) -> anyhow::Result<()> {
        loop {
            self.transition(DriverState::Sampling);
            let task = self.spawn_sample();
            let sample = tokio::select! {
                biased;
                _ = shutdown.wait() => None,
                s = task => Some(s),
            };
            // post-sample suspension point
            let Some(joined) = sample.filter(|_| !shutdown.is_triggered()) else {
                self.transition(DriverState::Interrupted);
                return Ok(());
            };
            let sample = joined.unwrap_or_else(|e| RawSample {
                metrics: Err(ProbeError::Task(e.to_string())),
                partitions: Vec::new(),
                processes: Vec::new(),
            });

            self.transition(DriverState::Building);
            self.paint_sample(&sample, Local::now())?;
            self.transition(DriverState::Painted);

            let every = match mode {
                RunMode::Once => return Ok(()),
                RunMode::Continuous(every) => every,
            };
            // post-paint suspension point; the frame above is already complete
            if shutdown.is_triggered() {
                self.transition(DriverState::Interrupted);
                return Ok(());
            }
            tokio::select! {
                _ = sleep(every) => {}
                _ = shutdown.wait() => {
                    self.transition(DriverState::Interrupted);
                    return Ok(());
                }
            }
        }
    }

    fn spawn_sample(&self) -> JoinHandle<RawSample> {
        let mut provider = self.provider.clone();
        let window = self.cpu_window;
        tokio::task::spawn_blocking(move || RawSample::collect(&mut provider, window))
    }

    /// One panel per slot in the current tree, all from the same snapshot.
    pub fn build_panels(
        &self,
        m: Option<&MetricSnapshot>,
        now: &DateTime<Local>,
    ) -> Vec<(String, Panel)> {
        self.composer
            .slots()
            .iter()
            .map(|(name, kind)| (name.clone(), kind.build(m, now)))
            .collect()
    }

    /// Normalize, build every slot, then hand the finished screen to the renderer.
    pub fn paint_sample(&mut self, sample: &RawSample, now: DateTime<Local>) -> anyhow::Result<()> {
        let snapshot = normalize(sample, &self.classifier, now);
        if snapshot.is_none() {
            self.failed_ticks += 1;
            if let Err(e) = &sample.metrics {
                warn!("sample failed, painting error state: {e}");
            }
        }
        let panels = self.build_panels(snapshot.as_ref(), &now);
        self.composer.apply(panels)?;
        self.renderer.paint(&self.composer)?;
        self.ticks += 1;
        Ok(())
    }
}
