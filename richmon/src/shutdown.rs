//! Cooperative cancellation: Ctrl-C, quit keys, or tests trigger it; the driver checks it
//! after sampling, after painting, and while sleeping.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tokio::sync::Notify;
use tracing::{debug, warn};

#[derive(Clone, Default)]
pub struct Shutdown {
    flag: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        if !self.flag.swap(true, Ordering::AcqRel) {
            debug!("shutdown requested");
        }
        self.notify.notify_waiters();
    }

    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Resolves once `trigger` has been called (immediately if it already was).
    pub async fn wait(&self) {
        loop {
            let notified = self.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.is_triggered() {
                return;
            }
            notified.await;
        }
    }

    /// SIGINT outside raw mode.
    pub fn listen_ctrl_c(&self) -> tokio::task::JoinHandle<()> {
        let me = self.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => me.trigger(),
                Err(e) => warn!("cannot listen for ctrl-c: {e}"),
            }
        })
    }

    /// In raw mode Ctrl-C arrives as a key event; `q` and Esc quit too.
    pub fn watch_keys(&self) -> JoinHandle<()> {
        let me = self.clone();
        thread::spawn(move || {
            while !me.is_triggered() {
                match event::poll(Duration::from_millis(100)) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(e) => {
                        warn!("terminal event poll failed: {e}");
                        return;
                    }
                }
                if let Ok(Event::Key(k)) = event::read() {
                    if k.kind == KeyEventKind::Press && is_quit_key(k.code, k.modifiers) {
                        me.trigger();
                    }
                }
            }
        })
    }
}

pub fn is_quit_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
