use std::io::{self, Stdout, Write};

use crate::ports::outbound::message_sink::{MessageSink, SinkError};

/// Writes each line to an [`io::Write`] and flushes it straight away.
pub struct WriterSink<W: Write> {
    writer: W,
    label: &'static str,
}

impl WriterSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), "stdout")
    }
}

impl<W: Write> WriterSink<W> {
    /// `label` names the destination in error messages.
    pub fn new(writer: W, label: &'static str) -> Self {
        Self { writer, label }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MessageSink for WriterSink<W> {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        writeln!(self.writer, "{line}")
            .and_then(|_| self.writer.flush())
            .map_err(|source| SinkError::Write {
                sink: self.label,
                source,
            })
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
