//! Line-based player input.
use std::io::{BufRead, Write};

use game_core::ActionMenu;
use runtime::{PlayerInput, Result, RuntimeError};

/// Prints prompts to `writer` and reads one line per answer from `reader`.
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self) -> Result<String> {
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(RuntimeError::InputClosed);
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> PlayerInput for LineInput<R, W> {
    fn read_action(&mut self, menu: &ActionMenu) -> Result<String> {
        writeln!(self.writer, "Choose an action:")?;
        for entry in menu.entries() {
            writeln!(self.writer, "  {}) {}", entry.index, entry.label)?;
        }
        write!(self.writer, "> ")?;
        self.read_line()
    }

    fn read_decision(&mut self) -> Result<String> {
        write!(self.writer, "Continue (y) or quit (q)? ")?;
        self.read_line()
    }
}
