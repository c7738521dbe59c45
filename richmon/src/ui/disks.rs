//! Storage cards: one per drive, badge by drive type.

use crate::panel::{Card, Line, Panel, PanelBody, Span, SpanStyle, Tone};
use crate::types::{DriveInfo, DriveType, MetricSnapshot};
use crate::ui::gauge::{bar, BAR_WIDTH};
use crate::ui::util::humanize_bytes;

const TITLE: &str = "Storage";

pub fn drive_tone(t: DriveType) -> Tone {
    match t {
        DriveType::System => Tone::Cyan,
        DriveType::Internal => Tone::Green,
        DriveType::External => Tone::Magenta,
    }
}

fn card(d: &DriveInfo) -> Card {
    let tone = drive_tone(d.drive_type);
    let b = bar(d.percent, BAR_WIDTH);
    Card {
        title: Line::new(vec![
            Span::styled(
                format!("[{}] ", d.drive_type.label()),
                SpanStyle::fg(tone).bold(),
            ),
            Span::raw(d.mountpoint.clone()),
        ]),
        border: tone,
        lines: vec![
            Line::styled(
                format!("{} · {}", d.device, d.fstype),
                SpanStyle::fg(Tone::DarkGray),
            ),
            Line::raw(format!(
                "{} / {}  ({} free)",
                humanize_bytes(d.used),
                humanize_bytes(d.total),
                humanize_bytes(d.free)
            )),
            Line::new(vec![b.span(), Span::raw(format!(" {:5.1}%", d.percent))]),
        ],
    }
}

pub fn build_storage(m: Option<&MetricSnapshot>) -> Panel {
    let Some(mm) = m else {
        return Panel::error(TITLE, "Error loading storage stats");
    };
    let title = Line::styled(
        format!("{TITLE} ({} drives)", mm.drives.len()),
        SpanStyle::fg(Tone::Cyan).bold(),
    );
    if mm.drives.is_empty() {
        return Panel::new(
            title,
            Tone::Cyan,
            PanelBody::Text(vec![Line::styled(
                "No storage data",
                SpanStyle::fg(Tone::DarkGray),
            )]),
        );
    }
    Panel::new(
        title,
        Tone::Cyan,
        PanelBody::Cards(mm.drives.iter().map(card).collect()),
    )
}
