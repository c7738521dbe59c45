//! Tone/SpanStyle -> ratatui styles.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TuiLine, Span as TuiSpan};

use crate::panel::{Line, SpanStyle, Tone};

pub fn color(t: Tone) -> Color {
    match t {
        Tone::Default => Color::Reset,
        Tone::Black => Color::Black,
        Tone::Red => Color::Red,
        Tone::Green => Color::Green,
        Tone::Yellow => Color::Yellow,
        Tone::Blue => Color::Blue,
        Tone::Magenta => Color::Magenta,
        Tone::Cyan => Color::Cyan,
        Tone::Gray => Color::Gray,
        Tone::DarkGray => Color::DarkGray,
        Tone::LightRed => Color::LightRed,
        Tone::LightGreen => Color::LightGreen,
        Tone::LightYellow => Color::LightYellow,
        Tone::LightBlue => Color::LightBlue,
        Tone::LightMagenta => Color::LightMagenta,
        Tone::LightCyan => Color::LightCyan,
        Tone::White => Color::White,
    }
}

pub fn style(s: SpanStyle) -> Style {
    let mut st = Style::default().fg(color(s.fg));
    if let Some(bg) = s.bg {
        st = st.bg(color(bg));
    }
    if s.bold {
        st = st.add_modifier(Modifier::BOLD);
    }
    st
}

pub fn line(l: &Line) -> TuiLine<'static> {
    TuiLine::from(
        l.spans
            .iter()
            .map(|s| TuiSpan::styled(s.text.clone(), style(s.style)))
            .collect::<Vec<_>>(),
    )
}
