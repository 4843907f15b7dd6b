//! JSON-lines trace sink.

use std::io::Write;

use crate::core::MoveRecord;
use crate::error::HanoiError;

use super::MoveSink;

/// Writes each move as a single-line JSON object:
/// `{"step":1,"from":0,"to":2,"disk":1}`.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MoveSink for JsonLinesSink<W> {
    fn record(&mut self, record: &MoveRecord) -> Result<(), HanoiError> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), HanoiError> {
        self.writer.flush()?;
        Ok(())
    }
}
