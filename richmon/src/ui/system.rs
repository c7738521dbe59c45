//! System information: identity, uptime, memory size and load averages.

use crate::panel::{Line, Panel, PanelBody, Span, SpanStyle, Tone};
use crate::types::MetricSnapshot;
use crate::ui::gauge::{load_bar, load_percent, LOAD_BAR_WIDTH};
use crate::ui::util::{fmt_uptime, gib_1};

const TITLE: &str = "System Information";

fn field(key: &str, value: String) -> Line {
    Line::new(vec![
        Span::styled(format!("{key}: "), SpanStyle::fg(Tone::Cyan).bold()),
        Span::raw(value),
    ])
}

pub fn build_system_info(m: Option<&MetricSnapshot>) -> Panel {
    let Some(mm) = m else {
        return Panel::error(TITLE, "Error loading system stats");
    };
    let cores = mm.cpu_per_core.len();
    let la = mm.load_avg;
    let mut lines = vec![
        field("Hostname", mm.hostname.clone()),
        field("System", format!("{} {}", mm.system, mm.kernel).trim_end().to_string()),
        field("CPU Cores", cores.to_string()),
        field("Uptime", fmt_uptime(mm.uptime)),
        field("Memory Total", gib_1(mm.memory.total)),
        field(
            "Load Average",
            format!("{:.2}, {:.2}, {:.2}", la.one, la.five, la.fifteen),
        ),
    ];
    if let Some(boot) = mm.boot_time {
        lines.insert(4, field("Booted", boot.format("%Y-%m-%d %H:%M").to_string()));
    }
    for (label, load) in la.windows() {
        let b = load_bar(load, cores, LOAD_BAR_WIDTH);
        lines.push(Line::new(vec![
            Span::styled(format!("  {label:>3} "), SpanStyle::fg(Tone::DarkGray)),
            b.span(),
            Span::raw(format!(" {:5.1}%", load_percent(load, cores))),
        ]));
    }
    Panel::new(
        Line::styled(TITLE, SpanStyle::fg(Tone::Blue).bold()),
        Tone::Blue,
        PanelBody::Text(lines),
    )
}
