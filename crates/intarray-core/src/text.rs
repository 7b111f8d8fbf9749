//! Whitespace-delimited text encoding for whole arrays.
//!
//! Output layout: every value is followed by a single space, a line break
//! follows every [`VALUES_PER_LINE`]th value, and a final line break closes
//! a partial last line. The text always ends with exactly one line break.
//!
//! Input is a stream of integer tokens separated by any whitespace,
//! including line breaks. [`TokenReader`] hands out one token at a time so
//! that tokens beyond what one array needs stay available for the next read.

use std::fmt;
use std::io::{self, BufRead};

use log::warn;

use crate::error::IntArrayError;

/// Values emitted per output line.
pub const VALUES_PER_LINE: usize = 10;

/// Write `values` in the array text layout.
pub fn write_values<W: fmt::Write + ?Sized>(out: &mut W, values: &[i32]) -> fmt::Result {
    for (i, v) in values.iter().enumerate() {
        write!(out, "{v} ")?;
        if (i + 1) % VALUES_PER_LINE == 0 {
            out.write_char('\n')?;
        }
    }
    if values.len() % VALUES_PER_LINE != 0 {
        out.write_char('\n')?;
    }
    Ok(())
}

/// Pulls whitespace-separated tokens from a buffered reader, one line at a
/// time.
///
/// Lines are split as raw bytes on ASCII whitespace, so a byte that is not
/// valid UTF-8 only affects the token it sits in. Tokens are handed out as
/// bytes and decoded by the caller.
///
/// Generic over `R: BufRead` so tests can use `&[u8]` and the driver can use
/// a locked stdin or `BufReader<File>`.
pub struct TokenReader<R: BufRead> {
    reader: R,
    /// Current line; `line[cursor..]` has not been handed out yet.
    line: Vec<u8>,
    cursor: usize,
    tokens_read: u64,
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            cursor: 0,
            tokens_read: 0,
        }
    }

    /// Next token, or `None` once the reader is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<&[u8]>> {
        loop {
            if let Some((start, end)) = self.pending_bounds() {
                self.cursor = end;
                self.tokens_read += 1;
                return Ok(Some(&self.line[start..end]));
            }
            self.line.clear();
            self.cursor = 0;
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
        }
    }

    /// Total tokens handed out so far.
    pub fn tokens_read(&self) -> u64 {
        self.tokens_read
    }

    fn pending_bounds(&self) -> Option<(usize, usize)> {
        let rest = &self.line[self.cursor..];
        let skip = rest.iter().position(|b| !b.is_ascii_whitespace())?;
        let start = self.cursor + skip;
        let len = self.line[start..]
            .iter()
            .position(u8::is_ascii_whitespace)
            .unwrap_or(self.line.len() - start);
        Some((start, start + len))
    }
}

/// Read exactly `len` integers into a fresh buffer.
///
/// Stops at the first bad or missing token; whatever was staged is
/// discarded by the caller.
pub(crate) fn read_values<R: BufRead>(
    input: &mut TokenReader<R>,
    len: usize,
) -> Result<Box<[i32]>, IntArrayError> {
    let mut staged = Vec::with_capacity(len);
    for position in 0..len {
        let token = match input.next_token()? {
            Some(token) => token,
            None => {
                warn!("input ended after {position} of {len} values");
                return Err(IntArrayError::UnexpectedEof {
                    expected: len,
                    read: position,
                });
            }
        };
        match std::str::from_utf8(token).ok().and_then(|t| t.parse::<i32>().ok()) {
            Some(v) => staged.push(v),
            None => {
                let token = String::from_utf8_lossy(token).into_owned();
                warn!("rejecting malformed token {token:?} for element {position}");
                return Err(IntArrayError::MalformedToken { position, token });
            }
        }
    }
    Ok(staged.into_boxed_slice())
}
