use std::fmt::Display;

use tracing::debug;

use crate::domain::greeting;
use crate::ports::outbound::message_sink::{MessageSink, SinkError};

pub struct GreeterService<S: MessageSink> {
    sink: S,
}

impl<S: MessageSink> GreeterService<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Emits `Hello, {name}!` as one line and returns the same text.
    ///
    /// Fails only when the sink cannot be written to.
    pub fn greet(&mut self, name: impl Display) -> Result<String, SinkError> {
        let message: String = greeting::compose(name);
        debug!(%message, "composed greeting");
        self.sink.emit(&message)?;
        Ok(message)
    }

    pub fn into_sink(self) -> S {
        self.sink
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
