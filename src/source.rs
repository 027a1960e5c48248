//! Line sources feeding the parser.

use crate::error::Result;
use std::io::BufRead;

/// Reads `\n`-terminated lines from a buffered reader.
///
/// The terminator and a preceding `\r` are stripped. A final line without
/// a terminator is still returned.
pub struct ReaderLines<R> {
    reader: R,
    buf: String,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }

    /// Next line, or `None` once the reader is exhausted.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        let line = self.buf.strip_suffix('\n').unwrap_or(self.buf.as_str());
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Some(line.to_string()))
    }
}
