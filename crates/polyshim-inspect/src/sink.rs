//! Line sinks: where rendered lines go.

use std::io::{self, Write};

/// Accepts rendered output one line at a time, in order.
///
/// Lines never contain a trailing newline. Failures are the sink's own
/// business; callers never observe them through this trait.
pub trait LineSink {
    fn accept(&mut self, line: &str);
}

impl LineSink for Vec<String> {
    fn accept(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<F> LineSink for F
where
    F: FnMut(&str),
{
    fn accept(&mut self, line: &str) {
        self(line)
    }
}

/// Writes each line followed by `\n` to an `io::Write`.
///
/// The first write error is kept and every later line is dropped; call
/// [`WriterSink::finish`] to surface it.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Flush and return the writer, or the first error seen.
    pub fn finish(self) -> io::Result<W> {
        let WriterSink { mut inner, error } = self;
        if let Some(e) = error {
            return Err(e);
        }
        inner.flush()?;
        Ok(inner)
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn accept(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.inner, "{line}") {
            tracing::warn!(error = %e, "line sink write failed; dropping remaining lines");
            self.error = Some(e);
        }
    }
}

/// Forwards every line to the host log as an INFO event on
/// `polyshim::console`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LineSink for TracingSink {
    fn accept(&mut self, line: &str) {
        tracing::info!(target: "polyshim::console", "{line}");
    }
}
