//! Input and output collaborators for the driver.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::num_parse::parse_i32;

/// Source of integers, one per call.
pub trait ReadInt {
    /// Returns the next integer, or `None` once the input is exhausted.
    fn read_int(&mut self) -> Result<Option<i32>>;
}

/// Sink of integers, one per call.
pub trait WriteInt {
    fn write_int(&mut self, value: i32) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Reads whitespace-separated decimal integers. Values may share a line or
/// span several lines.
pub struct TokenReader<R> {
    inner: R,
    line: String,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: String::new(),
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            self.line.clear();
            if self.inner.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
    }
}

impl<R: BufRead> ReadInt for TokenReader<R> {
    fn read_int(&mut self) -> Result<Option<i32>> {
        match self.next_token()? {
            Some(token) => match parse_i32(&token) {
                Some(value) => Ok(Some(value)),
                None => Err(Error::MalformedInteger(token)),
            },
            None => Ok(None),
        }
    }
}

/// Writes each integer on its own line.
pub struct LineWriter<W> {
    inner: W,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> WriteInt for LineWriter<W> {
    fn write_int(&mut self, value: i32) -> Result<()> {
        writeln!(self.inner, "{value}")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}
