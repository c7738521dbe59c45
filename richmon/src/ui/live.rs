//! Animated status panel driven by `frame_at`.

use chrono::{DateTime, Local};

use crate::anim::frame_at;
use crate::panel::{Line, Panel, PanelBody, Span, SpanStyle, Tone};
use crate::types::MetricSnapshot;

const TITLE: &str = "Live";

pub fn build_live(m: Option<&MetricSnapshot>, now: &DateTime<Local>) -> Panel {
    if m.is_none() {
        return Panel::error(TITLE, "Sampling failed this tick");
    }
    let fr = frame_at(now);
    let outer = |n: usize| Span::styled(fr.outer_glyph.repeat(n), SpanStyle::fg(fr.outer_color));
    let ring = || Span::styled(fr.outer_glyph, SpanStyle::fg(fr.ring_color).bold());

    let lines = vec![
        Line::new(vec![Span::raw("   "), outer(3)]),
        Line::new(vec![
            Span::raw("   "),
            ring(),
            Span::styled(fr.center_glyph, SpanStyle::fg(fr.palette.center).bold()),
            ring(),
        ]),
        Line::new(vec![Span::raw("   "), outer(3)]),
        Line::default(),
        Line::new(vec![
            Span::styled(fr.spinner_glyph, SpanStyle::fg(fr.palette.accent).bold()),
            Span::styled(" LIVE ", SpanStyle::fg(fr.palette.secondary).bold()),
            Span::raw(now.format("%H:%M:%S").to_string()),
        ]),
        Line::styled(
            format!("palette: {}", fr.palette.name),
            SpanStyle::fg(Tone::DarkGray),
        ),
    ];
    Panel::new(
        Line::styled(TITLE, SpanStyle::fg(fr.palette.primary).bold()),
        fr.palette.primary,
        PanelBody::Text(lines),
    )
}
