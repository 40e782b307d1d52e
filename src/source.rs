use std::io::Read;

use memchr::memchr2;

use crate::error::ReaderError;
use crate::token::{Scan, Token, scan_token};

const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Buffered lookahead over a byte stream.
///
/// Unlike `BufReader`, refilling appends to the unconsumed tail so the
/// classifier can demand arbitrarily many bytes of lookahead before
/// committing to a match.
pub(crate) struct LineSource<R> {
    inner: R,
    buf: Vec<u8>,
    pos: usize,
    chunk_size: usize,
    eof: bool,
}

impl<R: Read> LineSource<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, inner)
    }

    pub(crate) fn with_capacity(capacity: usize, inner: R) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(capacity),
            pos: 0,
            chunk_size: capacity.max(1),
            eof: false,
        }
    }

    fn available(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    /// Reads more bytes from the source into the buffer. Returns 0 only at
    /// end of stream.
    fn fill(&mut self) -> Result<usize, ReaderError> {
        if self.eof {
            return Ok(0);
        }
        if self.pos > 0 {
            self.buf.drain(..self.pos);
            self.pos = 0;
        }
        let start = self.buf.len();
        self.buf.resize(start + self.chunk_size, 0);
        match self.inner.read(&mut self.buf[start..]) {
            Ok(n) => {
                self.buf.truncate(start + n);
                if n == 0 {
                    self.eof = true;
                }
                Ok(n)
            }
            Err(e) => {
                self.buf.truncate(start);
                Err(e.into())
            }
        }
    }

    /// Longest-match selection among the token candidates, refilling until
    /// the match is decisive. `None` means the bytes at the current position
    /// fit no candidate.
    pub(crate) fn select(&mut self) -> Result<Option<Token>, ReaderError> {
        loop {
            match scan_token(self.available(), self.eof) {
                Scan::Match(token, len) => {
                    self.pos += len;
                    return Ok(Some(token));
                }
                Scan::NoMatch => return Ok(None),
                Scan::Incomplete => {
                    self.fill()?;
                }
            }
        }
    }

    /// Appends everything up to (but not including) the next `\r` or `\n`
    /// to `out`. Fails with `UnexpectedEof` if the stream ends first.
    pub(crate) fn read_to_terminator(&mut self, out: &mut Vec<u8>) -> Result<(), ReaderError> {
        loop {
            if let Some(i) = memchr2(b'\r', b'\n', self.available()) {
                out.extend_from_slice(&self.buf[self.pos..self.pos + i]);
                self.pos += i;
                return Ok(());
            }
            out.extend_from_slice(&self.buf[self.pos..]);
            self.pos = self.buf.len();
            if self.fill()? == 0 {
                return Err(ReaderError::UnexpectedEof);
            }
        }
    }

    /// Discards everything up to the next `\r` or `\n`, leaving the
    /// terminator unconsumed. Returns `false` if the stream is exhausted
    /// without one.
    pub(crate) fn skip_to_terminator(&mut self) -> Result<bool, ReaderError> {
        loop {
            if let Some(i) = memchr2(b'\r', b'\n', self.available()) {
                self.pos += i;
                return Ok(true);
            }
            self.pos = self.buf.len();
            if self.fill()? == 0 {
                return Ok(false);
            }
        }
    }
}
