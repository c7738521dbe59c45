//! Console renderer: takes the whole composed screen and repaints it in one draw call.

use crossterm::{
    execute,
    style::Stylize,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend, TestBackend},
    buffer::Buffer,
    Frame, Terminal, TerminalOptions, Viewport,
};
use std::io::{self, Stdout, Write};
use thiserror::Error;

use crate::layout::Composer;
use crate::ui::draw::{draw_empty, draw_panel};

const FALLBACK_WIDTH: u16 = 120;
const FALLBACK_HEIGHT: u16 = 40;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("terminal i/o: {0}")]
    Io(#[from] io::Error),
}

pub trait Renderer {
    /// Repaint every slot as one frame. Nothing reaches the terminal before all slots are drawn.
    fn paint(&mut self, screen: &Composer) -> Result<(), RenderError>;

    /// Release the terminal; `notice` is printed afterwards on the normal screen.
    fn finish(&mut self, notice: Option<&str>) -> Result<(), RenderError>;
}

pub fn draw_dashboard(f: &mut Frame<'_>, screen: &Composer) {
    for (name, rect) in screen.areas(f.area()) {
        match screen.content(name) {
            Some(p) => draw_panel(f, rect, p),
            None => draw_empty(f, rect, name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScreenMode {
    Fullscreen,
    Inline,
    Detached,
}

pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    mode: ScreenMode,
    restored: bool,
}

impl TerminalRenderer<CrosstermBackend<Stdout>> {
    /// Alternate screen + raw mode, for continuous refresh.
    pub fn fullscreen() -> Result<Self, RenderError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        Ok(Self {
            terminal,
            mode: ScreenMode::Fullscreen,
            restored: false,
        })
    }

    /// Inline viewport the height of the terminal; the report stays in scrollback.
    pub fn inline() -> Result<Self, RenderError> {
        let height = crossterm::terminal::size()
            .map(|(_, h)| h)
            .unwrap_or(FALLBACK_HEIGHT)
            .max(1);
        let terminal = Terminal::with_options(
            CrosstermBackend::new(io::stdout()),
            TerminalOptions {
                viewport: Viewport::Inline(height),
            },
        )?;
        Ok(Self {
            terminal,
            mode: ScreenMode::Inline,
            restored: false,
        })
    }
}

impl<B: Backend> TerminalRenderer<B> {
    /// Any ratatui backend, without touching the real terminal's modes.
    pub fn with_backend(backend: B) -> Result<Self, RenderError> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            mode: ScreenMode::Detached,
            restored: false,
        })
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    fn restore(&mut self) -> Result<(), RenderError> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        match self.mode {
            ScreenMode::Fullscreen => {
                disable_raw_mode()?;
                execute!(io::stdout(), LeaveAlternateScreen)?;
                self.terminal.show_cursor()?;
            }
            ScreenMode::Inline => {
                let area = self.terminal.get_frame().area();
                self.terminal
                    .set_cursor_position((0, area.bottom().saturating_sub(1)))?;
                self.terminal.show_cursor()?;
                println!();
            }
            ScreenMode::Detached => {}
        }
        Ok(())
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn paint(&mut self, screen: &Composer) -> Result<(), RenderError> {
        // ratatui diffs against the previous buffer and flushes once per draw
        self.terminal.draw(|f| draw_dashboard(f, screen))?;
        Ok(())
    }

    fn finish(&mut self, notice: Option<&str>) -> Result<(), RenderError> {
        self.restore()?;
        if let Some(n) = notice {
            if self.mode != ScreenMode::Detached {
                println!("\n{}", n.red().bold());
            }
        }
        Ok(())
    }
}

impl<B: Backend> Drop for TerminalRenderer<B> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Rows of a drawn buffer as plain text, trailing blanks trimmed.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let width = usize::from(buf.area.width.max(1));
    buf.content
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect()
}

/// Draws off-screen and prints the last frame as plain text on `finish`.
/// Used when stdout is a pipe or a file, where no viewport can be set up.
pub struct PlainRenderer<W: Write> {
    terminal: Terminal<TestBackend>,
    out: W,
    painted: bool,
}

impl PlainRenderer<Stdout> {
    /// Canvas the size of the controlling terminal, or 120x40 without one.
    pub fn stdout() -> Result<Self, RenderError> {
        let (w, h) = crossterm::terminal::size()
            .ok()
            .filter(|&(w, h)| w > 0 && h > 0)
            .unwrap_or((FALLBACK_WIDTH, FALLBACK_HEIGHT));
        Self::new(w, h, io::stdout())
    }
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(width: u16, height: u16, out: W) -> Result<Self, RenderError> {
        Ok(Self {
            terminal: Terminal::new(TestBackend::new(width.max(1), height.max(1)))?,
            out,
            painted: false,
        })
    }

    pub fn out(&self) -> &W {
        &self.out
    }

    pub fn lines(&self) -> Vec<String> {
        buffer_lines(self.terminal.backend().buffer())
    }
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn paint(&mut self, screen: &Composer) -> Result<(), RenderError> {
        self.terminal.draw(|f| draw_dashboard(f, screen))?;
        self.painted = true;
        Ok(())
    }

    fn finish(&mut self, notice: Option<&str>) -> Result<(), RenderError> {
        if self.painted {
            for l in self.lines() {
                writeln!(self.out, "{l}")?;
            }
        }
        if let Some(n) = notice {
            writeln!(self.out, "\n{n}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
