//! Per-core horizontal bars and the vertical equalizer.

use crate::panel::{Line, Panel, PanelBody, Span, SpanStyle, Tone};
use crate::types::MetricSnapshot;
use crate::ui::gauge::{bar, eq_lit, EqBucket, BAR_WIDTH, EQ_HEIGHT, FILLED};

const CORES_TITLE: &str = "CPU Cores";
const EQ_TITLE: &str = "CPU Equalizer";
const EQ_UNLIT: &str = "·";

pub fn build_cpu_cores(m: Option<&MetricSnapshot>) -> Panel {
    let Some(mm) = m else {
        return Panel::error(CORES_TITLE, "Error loading CPU stats");
    };
    let lines: Vec<Line> = mm
        .cpu_per_core
        .iter()
        .enumerate()
        .map(|(i, &u)| {
            Line::new(vec![
                Span::raw(format!("Core {i:2}: ")),
                bar(u, BAR_WIDTH).span(),
                Span::raw(format!(" {u:5.1}%")),
            ])
        })
        .collect();
    Panel::new(
        Line::styled(CORES_TITLE, SpanStyle::fg(Tone::Yellow).bold()),
        Tone::Yellow,
        PanelBody::Text(lines),
    )
}

/// Rows top to bottom; a core lights `floor(u/100 * H)` cells from the bottom.
pub fn equalizer_rows(cores: &[f32], height: usize) -> Vec<Line> {
    let lit: Vec<(usize, Tone)> = cores
        .iter()
        .map(|&u| (eq_lit(u, height), EqBucket::of(u).tone()))
        .collect();
    (0..height)
        .map(|row| {
            let level = height - row;
            let spans = lit
                .iter()
                .map(|&(n, tone)| {
                    if n >= level {
                        Span::styled(format!("{FILLED} "), SpanStyle::fg(tone))
                    } else {
                        Span::styled(format!("{EQ_UNLIT} "), SpanStyle::fg(Tone::DarkGray))
                    }
                })
                .collect::<Vec<_>>();
            Line::new(spans)
        })
        .collect()
}

pub fn build_cpu_equalizer(m: Option<&MetricSnapshot>) -> Panel {
    let Some(mm) = m else {
        return Panel::error(EQ_TITLE, "Error loading CPU stats");
    };
    if mm.cpu_per_core.is_empty() {
        return Panel::error(EQ_TITLE, "No CPU data");
    }
    let mut lines = equalizer_rows(&mm.cpu_per_core, EQ_HEIGHT);
    let labels: String = (0..mm.cpu_per_core.len())
        .map(|i| format!("{} ", i % 10))
        .collect();
    lines.push(Line::styled(labels, SpanStyle::fg(Tone::DarkGray)));
    lines.push(Line::new(vec![
        Span::styled("avg ", SpanStyle::fg(Tone::Cyan).bold()),
        Span::raw(format!("{:5.1}%", mm.cpu_total_pct)),
    ]));
    Panel::new(
        Line::styled(EQ_TITLE, SpanStyle::fg(Tone::Yellow).bold()),
        Tone::Yellow,
        PanelBody::Text(lines),
    )
}
