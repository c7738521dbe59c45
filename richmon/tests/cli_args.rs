//! CLI arg parsing tests for richmon
use assert_cmd::Command;
use richmon::app::{RunMode, FAST_INTERVAL, LIVE_INTERVAL};
use richmon::cli::{parse_args, CliExit};

fn args(list: &[&str]) -> Vec<String> {
    std::iter::once("richmon")
        .chain(list.iter().copied())
        .map(String::from)
        .collect()
}

#[test]
fn no_arguments_is_a_single_report() {
    assert_eq!(parse_args(args(&[])), Ok(RunMode::Once));
}

#[test]
fn live_and_fast_pick_refresh_interval() {
    assert_eq!(
        parse_args(args(&["--live"])),
        Ok(RunMode::Continuous(LIVE_INTERVAL))
    );
    assert_eq!(
        parse_args(args(&["--fast"])),
        Ok(RunMode::Continuous(FAST_INTERVAL))
    );
    assert_eq!(LIVE_INTERVAL.as_millis(), 1000);
    assert_eq!(FAST_INTERVAL.as_millis(), 500);
}

#[test]
fn help_wins_and_lists_modes() {
    for flag in ["-h", "--help"] {
        match parse_args(args(&["--live", flag])) {
            Err(CliExit::Help(text)) => {
                assert!(text.contains("Usage:"));
                assert!(text.contains("--live") && text.contains("--fast"));
            }
            other => panic!("expected help for {flag}, got {other:?}"),
        }
    }
}

#[test]
fn last_mode_flag_wins() {
    assert_eq!(
        parse_args(args(&["--live", "--fast"])),
        Ok(RunMode::Continuous(FAST_INTERVAL))
    );
    assert_eq!(
        parse_args(args(&["--fast", "--live"])),
        Ok(RunMode::Continuous(LIVE_INTERVAL))
    );
}

#[test]
fn unknown_flag_is_rejected() {
    assert!(matches!(
        parse_args(args(&["--verbose"])),
        Err(CliExit::Invalid(msg)) if msg.contains("--verbose")
    ));
}

#[test]
fn binary_help_exits_without_sampling() {
    let out = Command::cargo_bin("richmon")
        .expect("richmon binary")
        .arg("--help")
        .output()
        .expect("run richmon --help");
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains("Rich System Monitor"), "{text}");
    assert!(text.contains("--fast"), "{text}");
}

#[test]
fn binary_rejects_unknown_flag() {
    let out = Command::cargo_bin("richmon")
        .expect("richmon binary")
        .arg("--bogus")
        .output()
        .expect("run richmon --bogus");
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage:"));
}

#[test]
fn binary_single_report_works_when_piped() {
    let out = Command::cargo_bin("richmon")
        .expect("richmon binary")
        .env_remove("RICHMON_LAYOUT")
        .output()
        .expect("run richmon");
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains("Rich System Monitor"), "{text}");
    assert!(text.contains("Resource Usage"), "{text}");
}
