//! Categorised line output.

use std::io::{self, Write};

use colored::{Color, Colorize};

/// Severity or purpose of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Info,
    Success,
    Telemetry,
    Warn,
    Error,
}

impl LineKind {
    fn color(self) -> Color {
        match self {
            LineKind::Header => Color::Cyan,
            LineKind::Info => Color::BrightBlack,
            LineKind::Success => Color::Green,
            LineKind::Telemetry => Color::White,
            LineKind::Warn => Color::Yellow,
            LineKind::Error => Color::Red,
        }
    }
}

/// Sink for everything the session shows to the operator.
pub trait Console {
    /// Render one full line.
    fn line(&mut self, kind: LineKind, text: &str) -> io::Result<()>;

    /// Render a prompt and leave the cursor on the same line.
    fn prompt(&mut self, text: &str) -> io::Result<()>;
}

/// ANSI-coloured console over any writer (usually stdout).
pub struct TerminalConsole<W: Write> {
    writer: W,
}

impl<W: Write> TerminalConsole<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TerminalConsole<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console for TerminalConsole<W> {
    fn line(&mut self, kind: LineKind, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text.color(kind.color()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{}", text.color(LineKind::Header.color()))?;
        self.writer.flush()
    }
}
