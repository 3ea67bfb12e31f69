use anyhow::Context;
use colored::*;
use greeter_common::config::Config;
use greeter_common::success;
use greeter_core::adapters::outbound::writer_sink::WriterSink;
use greeter_core::application::services::calculator::CalculatorService;
use greeter_core::domain::operand::Operand;
use greeter_core::ports::outbound::message_sink::MessageSink;

use crate::terminal::colors;

pub fn add(x: Operand, y: Operand, cfg: &Config) -> anyhow::Result<()> {
    add_with(x, y, WriterSink::stdout(), cfg)?;
    Ok(())
}

/// Adds `x` and `y` and writes the sum to `sink` as one line.
pub fn add_with<S: MessageSink>(
    x: Operand,
    y: Operand,
    mut sink: S,
    cfg: &Config,
) -> anyhow::Result<f64> {
    let mut service = CalculatorService::new();
    let result: f64 = service.add(x.value(), y.value());
    sink.emit(&result.to_string())
        .context("could not report the sum")?;

    if cfg.show_summary() {
        success!(
            "{} + {} = {}",
            x,
            y,
            result.to_string().color(colors::RESULT).bold()
        );
    }
    Ok(result)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use greeter_core::adapters::outbound::memory_sink::MemorySink;

    fn operand(s: &str) -> Operand {
        s.parse().unwrap()
    }

    #[test]
    fn add_writes_sum_line() {
        let mut sink = MemorySink::new();
        let result = add_with(operand("5"), operand("3"), &mut sink, &Config::default()).unwrap();
        assert_eq!(result, 8.0);
        assert_eq!(sink.lines(), ["8"]);
    }

    #[test]
    fn add_negative_prints_zero() {
        let mut sink = MemorySink::new();
        add_with(operand("-2"), operand("2"), &mut sink, &Config::default()).unwrap();
        assert_eq!(sink.lines(), ["0"]);
    }

    #[test]
    fn add_fractions_prints_shortest_form() {
        let mut sink = MemorySink::new();
        add_with(operand("1.5"), operand("0.25"), &mut sink, &Config::default()).unwrap();
        assert_eq!(sink.lines(), ["1.75"]);
    }
}
