//! Plain-text trace sink.

use std::io::{self, Write};

use crate::core::MoveRecord;
use crate::error::HanoiError;

use super::MoveSink;

/// Writes one `Move disk from pole X to pole Y` line per move.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    /// Sink printing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> MoveSink for WriterSink<W> {
    fn record(&mut self, record: &MoveRecord) -> Result<(), HanoiError> {
        writeln!(self.writer, "{}", record)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), HanoiError> {
        self.writer.flush()?;
        Ok(())
    }
}
