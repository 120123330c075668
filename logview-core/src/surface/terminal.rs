use super::{StyledLine, Surface};
use crossterm::cursor::MoveToPreviousLine;
use crossterm::queue;
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, Write};

/// Writes lines to a terminal (or any writer) as they arrive.
pub struct TerminalSurface<W: Write> {
    out: W,
    colors: bool,
    /// Terminal width used to count wrapped rows; `None` means no wrapping.
    columns: Option<u16>,
    last_line: Option<String>,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout(colors: bool) -> Self {
        let surface = Self::new(io::stdout(), colors);
        match terminal::size() {
            Ok((columns, _)) => surface.with_columns(columns),
            Err(_) => surface,
        }
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, colors: bool) -> Self {
        Self {
            out,
            colors,
            columns: None,
            last_line: None,
        }
    }

    pub fn with_columns(mut self, columns: u16) -> Self {
        self.columns = (columns > 0).then_some(columns);
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Screen rows `text` occupies once the terminal wraps it.
    fn rows(&self, text: &str) -> u16 {
        let Some(columns) = self.columns else {
            return 1;
        };
        let rows = text.chars().count().div_ceil(usize::from(columns)).max(1);
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    fn write_line(&mut self, line: &StyledLine) -> io::Result<()> {
        writeln!(self.out, "{}", line.to_ansi(self.colors))?;
        self.out.flush()
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn append(&mut self, line: StyledLine) -> io::Result<()> {
        self.write_line(&line)?;
        self.last_line = Some(line.plain_text());
        Ok(())
    }

    fn replace_last(&mut self, line: StyledLine) -> io::Result<()> {
        if let Some(last) = &self.last_line {
            let rows = self.rows(last);
            queue!(
                self.out,
                MoveToPreviousLine(rows),
                Clear(ClearType::FromCursorDown)
            )?;
        }
        self.append(line)
    }

    fn last_line(&self) -> Option<String> {
        self.last_line.clone()
    }
}
