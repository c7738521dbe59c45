//! Backend-neutral panel content: style-tagged spans grouped into lines, tables and cards.
//! Panel builders emit these; the renderer maps them onto terminal widgets.

/// Named colors. The renderer owns the mapping to terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStyle {
    pub fg: Tone,
    pub bg: Option<Tone>,
    pub bold: bool,
}

impl SpanStyle {
    pub fn fg(fg: Tone) -> Self {
        Self {
            fg,
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn on(mut self, bg: Tone) -> Self {
        self.bg = Some(bg);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self::new(vec![Span::raw(text)])
    }

    pub fn styled(text: impl Into<String>, style: SpanStyle) -> Self {
        Self::new(vec![Span::styled(text, style)])
    }

    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Concatenated text without styles.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl From<Vec<Span>> for Line {
    fn from(spans: Vec<Span>) -> Self {
        Self::new(spans)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub header_style: SpanStyle,
    pub widths: Vec<u16>,
    pub rows: Vec<Vec<Line>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: Line,
    pub border: Tone,
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    Text(Vec<Line>),
    /// Single centered line inside the panel border.
    Banner(Line),
    Table(Table),
    Cards(Vec<Card>),
    /// The panel's input was missing this tick.
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: Line,
    pub border: Tone,
    pub body: PanelBody,
}

impl Panel {
    pub fn new(title: Line, border: Tone, body: PanelBody) -> Self {
        Self {
            title,
            border,
            body,
        }
    }

    pub fn error(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: Line::raw(title),
            border: Tone::Red,
            body: PanelBody::Error(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.body, PanelBody::Error(_))
    }
}
