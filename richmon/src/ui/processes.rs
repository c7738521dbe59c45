//! Top process tables, ranked by memory or by CPU, with mini bars.

use crate::panel::{Line, Panel, PanelBody, SpanStyle, Table, Tone};
use crate::rank::{top_n_by, ProcMetric, DEFAULT_TOP_N};
use crate::types::MetricSnapshot;
use crate::ui::gauge::{mini_bar, PROC_CPU, PROC_MEM};
use crate::ui::util::truncate;

const NAME_CHARS: usize = 14;

fn title_of(metric: ProcMetric) -> (&'static str, Tone) {
    match metric {
        ProcMetric::Memory => ("Top Processes", Tone::Red),
        ProcMetric::Cpu => ("Top CPU", Tone::Yellow),
    }
}

pub fn build_processes(m: Option<&MetricSnapshot>, metric: ProcMetric) -> Panel {
    let (title, tone) = title_of(metric);
    let Some(mm) = m else {
        return Panel::error(title, "Error loading process stats");
    };
    let thresholds = match metric {
        ProcMetric::Memory => PROC_MEM,
        ProcMetric::Cpu => PROC_CPU,
    };

    let rows: Vec<Vec<Line>> = top_n_by(&mm.processes, metric, DEFAULT_TOP_N)
        .iter()
        .map(|p| {
            let cpu = ProcMetric::Cpu.value(p);
            let mem = ProcMetric::Memory.value(p);
            vec![
                Line::styled(p.pid.to_string(), SpanStyle::fg(Tone::Cyan)),
                Line::raw(truncate(&p.name, NAME_CHARS)),
                Line::styled(format!("{cpu:.1}"), SpanStyle::fg(Tone::Yellow)),
                Line::styled(format!("{mem:.1}"), SpanStyle::fg(Tone::Green)),
                Line::new(vec![mini_bar(metric.value(p), thresholds).span()]),
            ]
        })
        .collect();

    Panel::new(
        Line::styled(
            format!("{title} ({} total)", mm.process_count),
            SpanStyle::fg(tone).bold(),
        ),
        tone,
        PanelBody::Table(Table {
            header: vec![
                "PID".into(),
                "Name".into(),
                "CPU%".into(),
                "MEM%".into(),
                String::new(),
            ],
            header_style: SpanStyle::fg(Tone::Red).bold(),
            widths: vec![8, 16, 8, 8, 16],
            rows,
        }),
    )
}
