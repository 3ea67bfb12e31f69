use crate::ports::outbound::message_sink::{MessageSink, SinkError};

/// Keeps emitted lines in memory. Used by tests and by callers that want the
/// output without touching a stream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl MessageSink for MemorySink {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
