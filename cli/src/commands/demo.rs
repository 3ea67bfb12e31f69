use anyhow::Context;
use colored::*;
use greeter_common::config::Config;
use greeter_common::info;
use greeter_core::adapters::outbound::writer_sink::WriterSink;
use greeter_core::application::services::calculator::CalculatorService;
use greeter_core::application::services::greeter::GreeterService;
use greeter_core::ports::outbound::message_sink::MessageSink;

use crate::mprint;
use crate::terminal::{colors, print};

const DEMO_X: f64 = 5.0;
const DEMO_Y: f64 = 3.0;
const DEMO_NAME: &str = "World";

pub fn demo(cfg: &Config) -> anyhow::Result<()> {
    demo_with(WriterSink::stdout(), cfg)?;
    Ok(())
}

/// Adds 5 and 3, then greets the world. Only the greeting reaches `sink`; the
/// sum is returned and shown in the summary.
pub fn demo_with<S: MessageSink>(sink: S, cfg: &Config) -> anyhow::Result<f64> {
    let mut calculator = CalculatorService::new();
    let result: f64 = calculator.add(DEMO_X, DEMO_Y);
    if cfg.show_summary() {
        info!("Stored {} + {} in a new accumulator", DEMO_X, DEMO_Y);
    }

    let mut greeter = GreeterService::new(sink);
    let message: String = greeter
        .greet(DEMO_NAME)
        .context("could not deliver the greeting")?;

    if cfg.show_summary() {
        print_summary(result, &message, cfg);
    }
    Ok(result)
}

fn print_summary(result: f64, message: &str, cfg: &Config) {
    mprint!();
    print::header("summary", cfg);
    print::GLOBAL_KEY_WIDTH.set(10);
    print::aligned_line("Result", result.to_string().color(colors::RESULT).bold());
    print::aligned_line("Greeting", message);
    if cfg.show_headers() {
        print::fat_separator();
        let output: ColoredString = "Demo complete".color(colors::ACCENT).bold();
        print::centerln(&output.to_string());
    }
    print::end_of_program(cfg);
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
    use crate::terminal::logging::capture;
    use greeter_core::adapters::outbound::memory_sink::MemorySink;

    #[test]
    fn demo_emits_only_the_greeting() {
        let mut sink = MemorySink::new();
        let result = demo_with(&mut sink, &Config::default()).unwrap();
        assert_eq!(result, 8.0);
        assert_eq!(sink.lines(), ["Hello, World!"]);
    }

    #[test]
    fn demo_logs_progress_and_summary() {
        let mut sink = MemorySink::new();
        let log = capture(|| {
            demo_with(&mut sink, &Config::default()).unwrap();
        });
        assert!(log.contains("[+] Stored 5 + 3 in a new accumulator"));
        assert!(log.contains("SUMMARY"));
    }

    #[test]
    fn demo_logs_nothing_decorated_at_quiet_two() {
        let cfg = Config { no_banner: false, quiet: 2 };
        let mut sink = MemorySink::new();
        let log = capture(|| {
            demo_with(&mut sink, &cfg).unwrap();
        });
        assert!(!log.contains("Stored"));
        assert!(!log.contains("SUMMARY"));
        assert_eq!(sink.lines(), ["Hello, World!"]);
    }

    #[test]
    fn demo_output_is_unchanged_when_quiet() {
        let cfg = Config { no_banner: true, quiet: 2 };
        let mut sink = MemorySink::new();
        assert_eq!(demo_with(&mut sink, &cfg).unwrap(), 8.0);
        assert_eq!(sink.lines(), ["Hello, World!"]);
    }
}
