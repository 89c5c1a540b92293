//! Stream-backed console

use question_bot_core::Console;
use std::io::{self, BufRead, Write};

/// Console over any line reader and writer
#[derive(Debug)]
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
    buf: String,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            buf: String::new(),
        }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Console bound to the process stdin and stdout
pub type StdConsole = LineConsole<io::StdinLock<'static>, io::Stdout>;

impl StdConsole {
    pub fn stdio() -> Self {
        LineConsole::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        let line = self.buf.trim_end_matches(['\n', '\r']);
        Ok(Some(line.to_string()))
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }
}
