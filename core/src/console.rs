//! Line-oriented console abstraction.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("input closed before a line was read")]
    Closed,
}

/// Blocking, line-at-a-time terminal interaction.
pub trait Console {
    /// Read one line, without its trailing newline.
    ///
    /// End of input is [`ConsoleError::Closed`].
    fn read_line(&mut self) -> Result<String, ConsoleError>;

    /// Write `text` with no newline and flush it.
    fn write(&mut self, text: &str) -> Result<(), ConsoleError>;

    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Show `text` inline and read the reply, like a shell prompt.
    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        self.write(text)?;
        self.read_line()
    }
}

/// [`Console`] over any buffered reader and writer.
///
/// Production code uses [`LineConsole::stdio`]; tests use byte slices and
/// `Vec<u8>`.
#[derive(Debug)]
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LineConsole<StdinLock<'static>, Stdout> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line)?;
        if bytes == 0 {
            return Err(ConsoleError::Closed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }
}
