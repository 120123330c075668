//! Display surfaces the renderer writes to.
//!
//! A surface is only ever touched from the display thread.

mod memory;
mod styled;
mod terminal;

pub use memory::MemorySurface;
pub use styled::{Span, StyledLine};
pub use terminal::TerminalSurface;

use std::io;

pub trait Surface {
    /// Appends a new line at the bottom.
    fn append(&mut self, line: StyledLine) -> io::Result<()>;

    /// Removes the bottom line and puts `line` in its place. Appends when the
    /// surface is empty.
    fn replace_last(&mut self, line: StyledLine) -> io::Result<()>;

    /// Plain text of the bottom line.
    fn last_line(&self) -> Option<String>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn append(&mut self, line: StyledLine) -> io::Result<()> {
        (**self).append(line)
    }

    fn replace_last(&mut self, line: StyledLine) -> io::Result<()> {
        (**self).replace_last(line)
    }

    fn last_line(&self) -> Option<String> {
        (**self).last_line()
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn append(&mut self, line: StyledLine) -> io::Result<()> {
        (**self).append(line)
    }

    fn replace_last(&mut self, line: StyledLine) -> io::Result<()> {
        (**self).replace_last(line)
    }

    fn last_line(&self) -> Option<String> {
        (**self).last_line()
    }
}
