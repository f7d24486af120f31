//! Output sinks.
//!
//! A sink receives fully rendered lines, one `write_line` per emitted metric.
//! Lines carry no trailing newline and sinks do not add one.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Destination for rendered lines.
pub trait Sink: Send + Sync {
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Process stdout. Each line is written and flushed immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.flush()
    }
}

/// Any `io::Write` behind a mutex (files, pipes, buffers).
#[derive(Debug)]
pub struct WriterSink<W> {
    inner: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut w = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("sink writer lock poisoned"))?;
        w.write_all(line.as_bytes())?;
        w.flush()
    }
}

/// Keeps every line in memory. Useful when embedding the client in tests.
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in write order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Everything written, concatenated as a byte stream would see it.
    pub fn contents(&self) -> String {
        self.lines().concat()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Sink for CaptureSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
        Ok(())
    }
}
