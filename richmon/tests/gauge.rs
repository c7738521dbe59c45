//! Bar, bucket and size formatting rules.
use richmon::panel::Tone;
use richmon::ui::gauge::{
    bar, eq_lit, load_bar, load_percent, mini_bar, Bucket, EqBucket, EQ_HEIGHT, MINI_BAR_WIDTH,
    PROC_CPU, PROC_MEM,
};
use richmon::ui::util::{fmt_uptime, humanize_bytes, truncate};
use std::time::Duration;

#[test]
fn bar_cells_always_sum_to_width() {
    for width in [1usize, 10, 15, 20, 33] {
        let mut prev = 0;
        for tenths in 0..=1000 {
            let pct = tenths as f32 / 10.0;
            let b = bar(pct, width);
            assert_eq!(b.filled + b.empty, width, "pct={pct} width={width}");
            assert!(b.filled >= prev, "filled must not decrease (pct={pct})");
            prev = b.filled;
        }
    }
}

#[test]
fn bar_boundaries() {
    assert_eq!(bar(0.0, 20).filled, 0);
    assert_eq!(bar(100.0, 20).filled, 20);
    assert_eq!(bar(150.0, 20).filled, 20);
    assert_eq!(bar(-5.0, 20).filled, 0);
    assert_eq!(bar(f32::NAN, 20).filled, 0);
    let b = bar(85.4, 20);
    assert_eq!((b.filled, b.empty), (17, 3));
    assert_eq!(b.glyphs(), format!("{}{}", "█".repeat(17), "░".repeat(3)));
}

#[test]
fn usage_buckets_are_80_60() {
    assert_eq!(bar(80.1, 20).bucket, Bucket::Alert);
    assert_eq!(bar(80.0, 20).bucket, Bucket::Warning);
    assert_eq!(bar(60.5, 20).bucket, Bucket::Warning);
    assert_eq!(bar(60.0, 20).bucket, Bucket::Normal);
    assert_eq!(Bucket::Alert.tone(), Tone::Red);
    assert_eq!(Bucket::Warning.tone(), Tone::Yellow);
    assert_eq!(Bucket::Normal.tone(), Tone::Green);
}

#[test]
fn process_mini_bars_use_their_own_scale() {
    let b = mini_bar(12.0, PROC_MEM);
    assert_eq!(b.width(), MINI_BAR_WIDTH);
    assert_eq!(b.filled, 6);
    assert_eq!(b.bucket, Bucket::Alert);
    assert_eq!(mini_bar(7.0, PROC_MEM).bucket, Bucket::Warning);
    assert_eq!(mini_bar(5.0, PROC_MEM).bucket, Bucket::Normal);

    assert_eq!(mini_bar(55.0, PROC_CPU).bucket, Bucket::Alert);
    assert_eq!(mini_bar(25.0, PROC_CPU).bucket, Bucket::Warning);
    assert_eq!(mini_bar(20.0, PROC_CPU).bucket, Bucket::Normal);
    assert_eq!(mini_bar(100.0, PROC_CPU).filled, MINI_BAR_WIDTH);
    assert_eq!(mini_bar(0.0, PROC_CPU).filled, 0);
}

#[test]
fn equalizer_lights_from_bottom_with_four_buckets() {
    assert_eq!(EQ_HEIGHT, 8);
    assert_eq!(eq_lit(0.0, EQ_HEIGHT), 0);
    assert_eq!(eq_lit(49.0, EQ_HEIGHT), 3);
    assert_eq!(eq_lit(100.0, EQ_HEIGHT), 8);
    assert_eq!(EqBucket::of(81.0), EqBucket::Hot);
    assert_eq!(EqBucket::of(61.0), EqBucket::Warm);
    assert_eq!(EqBucket::of(31.0), EqBucket::Active);
    assert_eq!(EqBucket::of(30.0), EqBucket::Idle);
    assert_ne!(EqBucket::Idle.tone(), EqBucket::Active.tone());
}

#[test]
fn load_uses_core_count_and_80_50() {
    assert_eq!(load_percent(2.0, 4), 50.0);
    assert_eq!(load_bar(2.0, 4, 10).bucket, Bucket::Normal);
    assert_eq!(load_bar(2.2, 4, 10).bucket, Bucket::Warning);
    assert_eq!(load_bar(3.3, 4, 10).bucket, Bucket::Alert);
    // usage rule would still call 55% normal
    assert_eq!(bar(55.0, 10).bucket, Bucket::Normal);
    assert_eq!(load_bar(8.0, 4, 10).filled, 10);
    assert_eq!(load_percent(1.0, 0), 100.0);
}

#[test]
fn humanize_switches_unit_at_one_tib() {
    let gib = 1u64 << 30;
    assert_eq!(humanize_bytes(0), "0 GB");
    assert_eq!(humanize_bytes(238 * gib), "238 GB");
    assert_eq!(humanize_bytes((1u64 << 40) - 1), "1024 GB");
    assert_eq!(humanize_bytes(1u64 << 40), "1.0 TB");
    assert_eq!(humanize_bytes(3 * (1u64 << 40) / 2), "1.5 TB");
}

#[test]
fn small_formatters() {
    assert_eq!(truncate("firefox-esr-nightly", 14), "firefox-esr-ni");
    assert_eq!(truncate("sshd", 14), "sshd");
    assert_eq!(
        fmt_uptime(Duration::from_secs(86_400 + 2 * 3_600 + 5 * 60 + 59)),
        "1d 2h 5m"
    );
}
