//! Percentage -> bar glyphs and color buckets.
//!
//! Each panel family has its own threshold table.

use crate::panel::{Span, SpanStyle, Tone};

pub const FILLED: &str = "█";
pub const EMPTY: &str = "░";

pub const BAR_WIDTH: usize = 20;
pub const MINI_BAR_WIDTH: usize = 15;
pub const MINI_BAR_DIVISOR: f32 = 2.0;
pub const LOAD_BAR_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub alert: f32,
    pub warn: f32,
}

/// CPU, memory, disk and per-core bars.
pub const USAGE: Thresholds = Thresholds {
    alert: 80.0,
    warn: 60.0,
};
pub const PROC_CPU: Thresholds = Thresholds {
    alert: 50.0,
    warn: 20.0,
};
pub const PROC_MEM: Thresholds = Thresholds {
    alert: 10.0,
    warn: 5.0,
};
pub const LOAD: Thresholds = Thresholds {
    alert: 80.0,
    warn: 50.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Alert,
    Warning,
    Normal,
}

impl Bucket {
    pub fn tone(self) -> Tone {
        match self {
            Bucket::Alert => Tone::Red,
            Bucket::Warning => Tone::Yellow,
            Bucket::Normal => Tone::Green,
        }
    }
}

impl Thresholds {
    pub fn bucket(&self, v: f32) -> Bucket {
        if v > self.alert {
            Bucket::Alert
        } else if v > self.warn {
            Bucket::Warning
        } else {
            Bucket::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub filled: usize,
    pub empty: usize,
    pub bucket: Bucket,
}

impl Bar {
    pub fn width(&self) -> usize {
        self.filled + self.empty
    }

    pub fn glyphs(&self) -> String {
        format!("{}{}", FILLED.repeat(self.filled), EMPTY.repeat(self.empty))
    }

    pub fn span(&self) -> Span {
        Span::styled(self.glyphs(), SpanStyle::fg(self.bucket.tone()))
    }
}

fn sane(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

fn cells(percent: f32, width: usize) -> usize {
    let p = f64::from(sane(percent).clamp(0.0, 100.0));
    ((p / 100.0 * width as f64).floor() as usize).min(width)
}

pub fn bar_with(percent: f32, width: usize, thresholds: Thresholds) -> Bar {
    let filled = cells(percent, width);
    Bar {
        filled,
        empty: width - filled,
        bucket: thresholds.bucket(sane(percent)),
    }
}

/// `floor(percent/100 * width)` cells, colored by the 80/60 rule.
pub fn bar(percent: f32, width: usize) -> Bar {
    bar_with(percent, width, USAGE)
}

/// Process-table bar: fixed width 15, one cell per two percent.
pub fn mini_bar(value: f32, thresholds: Thresholds) -> Bar {
    let v = sane(value).max(0.0);
    let filled = ((v / MINI_BAR_DIVISOR).floor() as usize).min(MINI_BAR_WIDTH);
    Bar {
        filled,
        empty: MINI_BAR_WIDTH - filled,
        bucket: thresholds.bucket(v),
    }
}

pub fn load_percent(load: f64, cores: usize) -> f32 {
    (load / cores.max(1) as f64 * 100.0) as f32
}

pub fn load_bar(load: f64, cores: usize, width: usize) -> Bar {
    bar_with(load_percent(load, cores), width, LOAD)
}

// Per-core equalizer

pub const EQ_HEIGHT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqBucket {
    Hot,
    Warm,
    Active,
    Idle,
}

impl EqBucket {
    pub fn of(usage: f32) -> Self {
        let u = sane(usage);
        if u > 80.0 {
            EqBucket::Hot
        } else if u > 60.0 {
            EqBucket::Warm
        } else if u > 30.0 {
            EqBucket::Active
        } else {
            EqBucket::Idle
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            EqBucket::Hot => Tone::Red,
            EqBucket::Warm => Tone::Yellow,
            EqBucket::Active => Tone::Green,
            EqBucket::Idle => Tone::Blue,
        }
    }
}

/// Rows lit from the bottom for a core at `usage`.
pub fn eq_lit(usage: f32, height: usize) -> usize {
    cells(usage, height)
}
