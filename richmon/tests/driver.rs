//! Refresh driver: single pass, failing ticks, and interruption.
mod common;

use common::{FakeProvider, RecordingRenderer};
use richmon::app::{App, DriverState, RunMode, STOP_NOTICE};
use richmon::layout::{Composer, LayoutShape};
use richmon::normalize::DriveClassifier;
use richmon::shutdown::Shutdown;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

fn app(provider: FakeProvider, renderer: RecordingRenderer) -> App<FakeProvider, RecordingRenderer> {
    let composer = Composer::new(LayoutShape::Showcase).expect("layout");
    App::new(provider, renderer, composer, DriveClassifier::default())
        .with_cpu_window(Duration::ZERO)
}

#[tokio::test]
async fn single_pass_paints_once_and_exits() {
    let provider = FakeProvider::default();
    let mut app = app(provider.clone(), RecordingRenderer::default());
    app.run(RunMode::Once, &Shutdown::new()).await.unwrap();

    assert_eq!(app.state(), DriverState::Terminal);
    assert_eq!(app.ticks(), 1);
    assert_eq!(app.failed_ticks(), 0);
    assert_eq!(provider.samples.load(Ordering::SeqCst), 1);

    let r = app.renderer();
    assert_eq!(r.frames.len(), 1);
    assert_eq!(r.finished, Some(None));
    // every slot of the tree is filled in the one frame
    assert_eq!(r.frames[0].len(), app.composer().slots().len());
    assert!(r.frames[0].iter().all(|(_, p)| !p.is_error()));
}

#[tokio::test]
async fn failed_tick_shows_error_state_then_recovers() {
    let shutdown = Shutdown::new();
    let provider = FakeProvider {
        fail_on: vec![1],
        ..Default::default()
    };
    let renderer = RecordingRenderer {
        stop_after: Some((3, shutdown.clone())),
        ..Default::default()
    };
    let mut app = app(provider, renderer);
    app.run(RunMode::Continuous(Duration::from_millis(5)), &shutdown)
        .await
        .unwrap();

    assert_eq!(app.state(), DriverState::Terminal);
    assert_eq!(app.ticks(), 3);
    assert_eq!(app.failed_ticks(), 1);

    let r = app.renderer();
    assert_eq!(r.frames.len(), 3);
    assert!(r.frames[0].iter().all(|(_, p)| p.is_error()));
    assert!(r.frames[1].iter().all(|(_, p)| !p.is_error()));
    assert!(r.frames[2].iter().all(|(_, p)| !p.is_error()));
    assert_eq!(r.finished, Some(Some(STOP_NOTICE.to_string())));
}

#[tokio::test]
async fn provider_that_always_fails_keeps_running() {
    let shutdown = Shutdown::new();
    let provider = FakeProvider {
        fail_always: true,
        ..Default::default()
    };
    let renderer = RecordingRenderer {
        stop_after: Some((2, shutdown.clone())),
        ..Default::default()
    };
    let mut app = app(provider, renderer);
    app.run(RunMode::Continuous(Duration::from_millis(5)), &shutdown)
        .await
        .unwrap();
    assert_eq!(app.ticks(), 2);
    assert_eq!(app.failed_ticks(), 2);
}

#[tokio::test]
async fn interrupt_while_sampling_skips_the_paint() {
    let shutdown = Shutdown::new();
    let provider = FakeProvider {
        delay: Duration::from_millis(500),
        ..Default::default()
    };
    let mut app = app(provider, RecordingRenderer::default());

    let trigger = shutdown.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.trigger();
    });

    let started = Instant::now();
    app.run(RunMode::Continuous(Duration::from_secs(1)), &shutdown)
        .await
        .unwrap();

    assert!(started.elapsed() < Duration::from_millis(450));
    assert_eq!(app.ticks(), 0);
    assert!(app.renderer().frames.is_empty());
    assert_eq!(
        app.renderer().finished,
        Some(Some(STOP_NOTICE.to_string()))
    );
    assert_eq!(app.state(), DriverState::Terminal);
}

#[tokio::test]
async fn interrupt_while_sleeping_keeps_the_last_frame() {
    let shutdown = Shutdown::new();
    let mut app = app(FakeProvider::default(), RecordingRenderer::default());

    let trigger = shutdown.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.trigger();
    });

    app.run(RunMode::Continuous(Duration::from_secs(30)), &shutdown)
        .await
        .unwrap();
    assert_eq!(app.ticks(), 1);
    assert_eq!(app.renderer().frames.len(), 1);
    assert_eq!(app.state(), DriverState::Terminal);
}

#[tokio::test]
async fn already_triggered_shutdown_paints_nothing() {
    let shutdown = Shutdown::new();
    shutdown.trigger();
    let mut app = app(FakeProvider::default(), RecordingRenderer::default());
    app.run(RunMode::Once, &shutdown).await.unwrap();
    assert_eq!(app.ticks(), 0);
    assert_eq!(
        app.renderer().finished,
        Some(Some(STOP_NOTICE.to_string()))
    );
}
