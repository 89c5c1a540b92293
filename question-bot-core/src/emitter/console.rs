//! Line-oriented input/output seam

use std::io;

/// Line-based input and output device driven by the emitter
pub trait Console {
    /// Block until a line is available. `Ok(None)` means input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Emit one line of output
    fn write_line(&mut self, text: &str) -> io::Result<()>;
}
