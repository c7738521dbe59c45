//! Command surface: no flag for a single report, `--live`/`--fast` for continuous refresh.

use crate::app::{RunMode, FAST_INTERVAL, LIVE_INTERVAL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliExit {
    /// `-h`/`--help`: print and exit successfully without sampling.
    Help(String),
    Invalid(String),
}

pub fn usage(prog: &str) -> String {
    format!(
        "Rich System Monitor\n\
         Usage:\n  \
         {prog}           # Single report\n  \
         {prog} --live    # Live monitoring (Ctrl+C to exit)\n  \
         {prog} --fast    # Live monitoring with 0.5s refresh"
    )
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<RunMode, CliExit> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "richmon".into());
    let mut mode = RunMode::Once;
    for arg in it {
        match arg.as_str() {
            "-h" | "--help" => return Err(CliExit::Help(usage(&prog))),
            "--live" => mode = RunMode::Continuous(LIVE_INTERVAL),
            "--fast" => mode = RunMode::Continuous(FAST_INTERVAL),
            other => {
                return Err(CliExit::Invalid(format!(
                    "Unexpected argument '{other}'.\n{}",
                    usage(&prog)
                )))
            }
        }
    }
    Ok(mode)
}
