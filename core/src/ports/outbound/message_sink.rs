use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write line to {sink}")]
    Write {
        sink: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// A line-oriented output channel.
///
/// Each call to [`MessageSink::emit`] produces exactly one line; the sink adds
/// the terminator.
pub trait MessageSink {
    fn emit(&mut self, line: &str) -> Result<(), SinkError>;
}

impl<S: MessageSink + ?Sized> MessageSink for &mut S {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        (**self).emit(line)
    }
}

impl<S: MessageSink + ?Sized> MessageSink for Box<S> {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        (**self).emit(line)
    }
}
