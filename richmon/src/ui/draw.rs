//! Paints panel content into a terminal frame.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line as TuiLine,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table as TuiTable},
    Frame,
};

use crate::panel::{Card, Panel, PanelBody, Table};
use crate::ui::theme::{color, line, style};

fn panel_block(p: &Panel) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(p.border)))
        .title(line(&p.title))
}

pub fn draw_panel(f: &mut Frame<'_>, area: Rect, p: &Panel) {
    match &p.body {
        PanelBody::Banner(l) => {
            let para = Paragraph::new(vec![line(l)])
                .alignment(Alignment::Center)
                .block(panel_block(p));
            f.render_widget(para, area);
        }
        PanelBody::Error(msg) => {
            let para = Paragraph::new(TuiLine::styled(
                msg.clone(),
                Style::default()
                    .fg(color(p.border))
                    .add_modifier(Modifier::BOLD),
            ))
            .block(panel_block(p));
            f.render_widget(para, area);
        }
        PanelBody::Text(lines) => {
            let para =
                Paragraph::new(lines.iter().map(line).collect::<Vec<_>>()).block(panel_block(p));
            f.render_widget(para, area);
        }
        PanelBody::Table(t) => draw_table(f, area, p, t),
        PanelBody::Cards(cards) => draw_cards(f, area, p, cards),
    }
}

fn draw_table(f: &mut Frame<'_>, area: Rect, p: &Panel, t: &Table) {
    let widths: Vec<Constraint> = t.widths.iter().map(|&w| Constraint::Length(w)).collect();
    let header =
        Row::new(t.header.iter().map(|h| Cell::from(h.clone()))).style(style(t.header_style));
    let rows = t
        .rows
        .iter()
        .map(|r| Row::new(r.iter().map(|c| Cell::from(line(c)))));
    let table = TuiTable::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(panel_block(p));
    f.render_widget(table, area);
}

fn draw_cards(f: &mut Frame<'_>, area: Rect, p: &Panel, cards: &[Card]) {
    let block = panel_block(p);
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Cards stack top-down; those that do not fit are dropped, never squeezed
    let mut y = inner.y;
    for c in cards {
        let h = c.lines.len() as u16 + 2;
        if y + h > inner.y + inner.height {
            break;
        }
        let slot = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: h,
        };
        let card = Paragraph::new(c.lines.iter().map(line).collect::<Vec<_>>()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(c.border)))
                .title(line(&c.title)),
        );
        f.render_widget(card, slot);
        y += h;
    }
}

/// Placeholder for a slot that has not received content yet.
pub fn draw_empty(f: &mut Frame<'_>, area: Rect, name: &str) {
    f.render_widget(
        Paragraph::new("waiting for first sample")
            .block(Block::default().borders(Borders::ALL).title(name.to_string())),
        area,
    );
}
