//! Resource usage table: CPU, memory and root disk bars plus network totals.

use crate::panel::{Line, Panel, PanelBody, Span, SpanStyle, Table, Tone};
use crate::types::MetricSnapshot;
use crate::ui::gauge::{bar, BAR_WIDTH};
use crate::ui::util::mib_1;

const TITLE: &str = "Resource Usage";

fn resource(c: &str) -> Line {
    Line::styled(c, SpanStyle::fg(Tone::Cyan))
}

fn usage_row(name: &str, pct: f32) -> Vec<Line> {
    let b = bar(pct, BAR_WIDTH);
    vec![
        resource(name),
        Line::raw(format!("{pct:.1}%")),
        Line::new(vec![b.span(), Span::raw(format!(" {pct:5.1}%"))]),
    ]
}

pub fn build_resources(m: Option<&MetricSnapshot>) -> Panel {
    let Some(mm) = m else {
        return Panel::error(TITLE, "Error loading resource stats");
    };
    let mut rows = vec![
        usage_row("CPU", mm.cpu_total_pct),
        usage_row("Memory", mm.memory.percent),
    ];
    match mm.primary_drive() {
        Some(d) => rows.push(usage_row("Disk", d.percent)),
        None => rows.push(vec![resource("Disk"), Line::raw("n/a"), Line::default()]),
    }
    rows.push(vec![
        resource("Net Sent"),
        Line::raw(mib_1(mm.network.bytes_sent)),
        Line::default(),
    ]);
    rows.push(vec![
        resource("Net Recv"),
        Line::raw(mib_1(mm.network.bytes_recv)),
        Line::default(),
    ]);

    Panel::new(
        Line::styled(TITLE, SpanStyle::fg(Tone::Green).bold()),
        Tone::Green,
        PanelBody::Table(Table {
            header: vec!["Resource".into(), "Usage".into(), "Visual".into()],
            header_style: SpanStyle::fg(Tone::Magenta).bold(),
            widths: vec![12, 15, 30],
            rows,
        }),
    )
}
