use crate::SessionError;
use std::io::{self, BufRead};

/// Whitespace-separated token reader over a line-buffered input.
///
/// Input is handled as raw bytes and split on ASCII whitespace, so bytes
/// that are not valid UTF-8 are ordinary token content rather than a read
/// error. Several values may share one line, and a value may be preceded by
/// any number of blank lines. `next_byte` takes a single byte and leaves the
/// rest of its token for the next read.
pub struct TokenReader<R> {
    reader: R,
    line: Vec<u8>,
    pos: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        TokenReader {
            reader,
            line: Vec::new(),
            pos: 0,
        }
    }

    /// Move to the next non-whitespace byte, reading more lines as needed.
    /// Returns false at end of input.
    fn skip_whitespace(&mut self) -> io::Result<bool> {
        loop {
            while self.pos < self.line.len() && self.line[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < self.line.len() {
                return Ok(true);
            }

            self.line.clear();
            self.pos = 0;
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(false);
            }
        }
    }

    /// Next whitespace-delimited token, or `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD, which never parses as a number.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }

        let rest = &self.line[self.pos..];
        let end = rest
            .iter()
            .position(|b| b.is_ascii_whitespace())
            .unwrap_or(rest.len());
        let token = String::from_utf8_lossy(&rest[..end]).into_owned();
        self.pos += end;

        Ok(Some(token))
    }

    /// Next non-whitespace byte, or `None` at end of input.
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }

        let b = self.line[self.pos];
        self.pos += 1;
        Ok(Some(b))
    }

    /// Next token parsed as an integer, or `None` at end of input.
    pub fn next_i32(&mut self) -> Result<Option<i32>, SessionError> {
        match self.next_token()? {
            Some(token) => token
                .parse::<i32>()
                .map(Some)
                .map_err(|_| SessionError::InvalidNumber(token)),
            None => Ok(None),
        }
    }

    /// Drop whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pos = self.line.len();
    }
}
