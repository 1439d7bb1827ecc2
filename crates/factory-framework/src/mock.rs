//! # Mock Sinks & Testing Guide
//!
//! Clients and demos never print directly. They write to a `&mut dyn Write`
//! handed in by the caller, which makes their output trivially testable. This
//! module provides two in-memory sinks for that purpose.
//!
//! | Sink | Behaviour | Use Case |
//! |------|-----------|----------|
//! | [`MockSink`] | Records every byte | Asserting exact client output |
//! | [`FailingSink`] | Accepts a byte budget, then errors | Checking error propagation |
//!
//! ## Capturing Output
//!
//! ```rust
//! use factory_framework::mock::MockSink;
//! use std::io::Write;
//!
//! let mut sink = MockSink::new();
//! writeln!(sink, "MySQL DB connected").unwrap();
//! writeln!(sink, "Record added to MySQL DB").unwrap();
//!
//! assert_eq!(sink.lines(), vec!["MySQL DB connected", "Record added to MySQL DB"]);
//! ```
//!
//! ## Simulating a Broken Output Stream
//!
//! ```rust
//! use factory_framework::mock::FailingSink;
//! use std::io::Write;
//!
//! let mut sink = FailingSink::after(4);
//! assert!(sink.write_all(b"abcd").is_ok());
//! assert!(sink.write_all(b"e").is_err());
//! ```

use std::io::{self, Write};

/// In-memory sink that records everything written to it.
#[derive(Debug, Default, Clone)]
pub struct MockSink {
    buffer: Vec<u8>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily as UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.buffer).into_owned()
    }

    /// Written text split into lines, without terminators.
    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Write for MockSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that accepts a fixed number of bytes and then fails every write.
#[derive(Debug)]
pub struct FailingSink {
    remaining: usize,
    written: Vec<u8>,
}

impl FailingSink {
    /// Creates a sink that accepts `budget` bytes before failing.
    pub fn after(budget: usize) -> Self {
        Self {
            remaining: budget,
            written: Vec::new(),
        }
    }

    /// Bytes accepted before the failure, decoded lossily as UTF-8.
    pub fn accepted(&self) -> String {
        String::from_utf8_lossy(&self.written).into_owned()
    }
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        let n = buf.len().min(self.remaining);
        self.written.extend_from_slice(&buf[..n]);
        self.remaining -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_sink_records_lines() {
        let mut sink = MockSink::new();
        assert!(sink.is_empty());

        write!(sink, "one\ntwo").unwrap();
        writeln!(sink, " halves").unwrap();

        assert_eq!(sink.text(), "one\ntwo halves\n");
        assert_eq!(sink.lines(), vec!["one", "two halves"]);
    }

    #[test]
    fn test_failing_sink_keeps_partial_output() {
        let mut sink = FailingSink::after(3);
        let err = sink.write_all(b"hello").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(sink.accepted(), "hel");
    }

    #[test]
    fn test_failing_sink_with_zero_budget() {
        let mut sink = FailingSink::after(0);
        assert!(writeln!(sink, "anything").is_err());
        assert_eq!(sink.accepted(), "");
    }
}
