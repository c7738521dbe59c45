//! Top banner with the sample time.

use chrono::{DateTime, Local};

use crate::panel::{Line, Panel, PanelBody, SpanStyle, Tone};
use crate::types::MetricSnapshot;

pub const APP_TITLE: &str = "Rich System Monitor";

pub fn build_header(m: Option<&MetricSnapshot>, now: &DateTime<Local>) -> Panel {
    let at = m.map(|mm| mm.sampled_at).unwrap_or(*now);
    let stamp = at.format("%Y-%m-%d %H:%M:%S");
    if m.is_none() {
        return Panel::new(
            Line::default(),
            Tone::Red,
            PanelBody::Error(format!("{APP_TITLE} - {stamp} - sampling failed")),
        );
    }
    let banner = Line::styled(
        format!("{APP_TITLE} - {stamp}"),
        SpanStyle::fg(Tone::White).bold().on(Tone::Blue),
    );
    Panel::new(Line::default(), Tone::Blue, PanelBody::Banner(banner))
}
