//! Entry point for richmon. Parses args and runs the refresh driver.

use richmon::app::{App, RunMode};
use richmon::cli::{parse_args, CliExit};
use richmon::config;
use richmon::layout::Composer;
use richmon::render::{PlainRenderer, TerminalRenderer};
use richmon::shutdown::Shutdown;
use richmon_probe::SysinfoProvider;
use std::env;
use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let Some(path) = config::log_path() else {
        return;
    };
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("richmon: cannot open log file {}: {e}", path.display());
            return;
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("richmon=info,richmon_probe=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mode = match parse_args(env::args()) {
        Ok(m) => m,
        Err(CliExit::Help(text)) => {
            println!("{text}");
            return Ok(());
        }
        Err(CliExit::Invalid(text)) => {
            eprintln!("{text}");
            std::process::exit(2);
        }
    };
    init_tracing();

    let shape = config::layout_shape();
    tracing::info!(?shape, ?mode, "starting");
    let composer = Composer::new(shape)?;
    let provider = SysinfoProvider::new();
    let shutdown = Shutdown::new();
    let _ctrl_c = shutdown.listen_ctrl_c();

    match mode {
        RunMode::Once => {
            let classifier = config::drive_classifier();
            if io::stdout().is_terminal() {
                let renderer = TerminalRenderer::inline()?;
                let mut app = App::new(provider, renderer, composer, classifier);
                app.run(mode, &shutdown).await
            } else {
                let renderer = PlainRenderer::stdout()?;
                let mut app = App::new(provider, renderer, composer, classifier);
                app.run(mode, &shutdown).await
            }
        }
        RunMode::Continuous(_) => {
            let renderer = TerminalRenderer::fullscreen()?;
            let keys = shutdown.watch_keys();
            let mut app = App::new(provider, renderer, composer, config::drive_classifier());
            let res = app.run(mode, &shutdown).await;
            shutdown.trigger();
            let _ = keys.join();
            res
        }
    }
}
