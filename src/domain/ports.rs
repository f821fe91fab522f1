use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Line-oriented conversation with the operator.
pub trait Prompter {
    /// Show `prompt` without a trailing newline and read one line back,
    /// line terminator removed. `Ok(None)` means the input is closed.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Write one full line.
    fn say(&mut self, line: &str) -> Result<()>;
}

/// `Prompter` over any buffered reader and writer.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}
