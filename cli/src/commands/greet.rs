use anyhow::Context;
use greeter_common::config::Config;
use greeter_common::{success, warn};
use greeter_core::adapters::outbound::writer_sink::WriterSink;
use greeter_core::application::services::greeter::GreeterService;
use greeter_core::ports::outbound::message_sink::MessageSink;

pub fn greet(name: &str, cfg: &Config) -> anyhow::Result<()> {
    greet_with(name, WriterSink::stdout(), cfg)?;
    Ok(())
}

pub fn greet_with<S: MessageSink>(name: &str, sink: S, cfg: &Config) -> anyhow::Result<String> {
    if name.trim().is_empty() {
        warn!("Greeting an empty name");
    }

    let mut service = GreeterService::new(sink);
    let message: String = service
        .greet(name)
        .with_context(|| format!("could not greet '{name}'"))?;

    if cfg.show_summary() {
        success!("Greeting delivered");
    }
    Ok(message)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
