use super::{StyledLine, Surface};
use std::collections::VecDeque;
use std::io;

/// In-memory scrollback, the surface a GUI text widget would mirror.
#[derive(Debug, Default)]
pub struct MemorySurface {
    lines: VecDeque<StyledLine>,
    /// Oldest lines are dropped past this many; `None` keeps everything.
    max_lines: Option<usize>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scrollback(max_lines: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            max_lines: Some(max_lines.max(1)),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &StyledLine> {
        self.lines.iter()
    }

    pub fn plain_lines(&self) -> Vec<String> {
        self.lines.iter().map(StyledLine::plain_text).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Whole surface as HTML, one `<br>`-separated line per entry.
    pub fn to_html(&self) -> String {
        self.lines
            .iter()
            .map(StyledLine::to_html)
            .collect::<Vec<_>>()
            .join("<br>\n")
    }

    fn trim(&mut self) {
        if let Some(max) = self.max_lines {
            while self.lines.len() > max {
                self.lines.pop_front();
            }
        }
    }
}

impl Surface for MemorySurface {
    fn append(&mut self, line: StyledLine) -> io::Result<()> {
        self.lines.push_back(line);
        self.trim();
        Ok(())
    }

    fn replace_last(&mut self, line: StyledLine) -> io::Result<()> {
        self.lines.pop_back();
        self.append(line)
    }

    fn last_line(&self) -> Option<String> {
        self.lines.back().map(StyledLine::plain_text)
    }
}
