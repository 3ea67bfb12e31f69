#![cfg(test)]
use std::sync::{Arc, Mutex};

use greeter_core::adapters::outbound::memory_sink::MemorySink;
use greeter_core::adapters::outbound::writer_sink::WriterSink;
use greeter_core::application::services::calculator::CalculatorService;
use greeter_core::application::services::greeter::GreeterService;
use greeter_core::domain::accumulator::Accumulator;
use greeter_core::domain::operand::Operand;
use greeter_core::ports::outbound::message_sink::{MessageSink, SinkError};

/// A greeter and an addition whose result is reported by the caller can
/// share one line-oriented output.
#[test]
fn greeting_and_reported_sum_share_one_output() {
    let mut sink = MemorySink::new();

    let mut calculator = CalculatorService::new();
    let sum = calculator.add(5.0, 3.0);
    assert_eq!(sum, 8.0);
    assert_eq!(calculator.result(), 8.0);
    sink.emit(&sum.to_string()).expect("memory sink never fails");

    let mut greeter = GreeterService::new(&mut sink);
    let message = greeter.greet("World").expect("memory sink never fails");
    assert_eq!(message, "Hello, World!");

    assert_eq!(sink.lines(), ["8", "Hello, World!"]);
}

#[test]
fn greeting_written_to_a_stream_is_one_line() {
    let mut greeter = GreeterService::new(WriterSink::new(Vec::new(), "buffer"));
    greeter.greet("World").unwrap();
    let bytes = greeter.into_sink().into_inner();
    assert_eq!(String::from_utf8(bytes).unwrap(), "Hello, World!\n");
}

#[test]
fn operands_from_text_feed_the_accumulator() {
    let x: Operand = " -2 ".parse().unwrap();
    let y: Operand = "2".parse().unwrap();

    let mut acc: Accumulator = Accumulator::new();
    assert_eq!(acc.add(x.into(), y.into()), 0.0);

    assert!("two".parse::<Operand>().is_err());
}

#[test]
fn overwrite_not_running_sum() {
    let mut acc = Accumulator::new();
    assert_eq!(acc.add(5, 3), 8);
    assert_eq!(acc.add(1, 1), 2);
    assert_ne!(acc.result(), 10);
}

#[test]
fn boxed_sinks_are_sinks() {
    let mut greeter = GreeterService::new(Box::new(MemorySink::new()) as Box<dyn MessageSink>);
    assert_eq!(greeter.greet("boxed").unwrap(), "Hello, boxed!");
}

/// A single accumulator shared across threads needs an external lock.
#[test]
fn shared_accumulator_behind_a_mutex() {
    let shared: Arc<Mutex<Accumulator<i64>>> = Arc::new(Mutex::new(Accumulator::new()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || shared.lock().unwrap().add(i, i))
        })
        .collect();

    let mut sums: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    sums.sort();
    assert_eq!(sums, [0, 2, 4, 6]);

    let last = shared.lock().unwrap().result();
    assert!(sums.contains(&last));
}

#[test]
fn sink_failure_surfaces_through_anyhow() {
    struct Full;

    impl MessageSink for Full {
        fn emit(&mut self, _line: &str) -> Result<(), SinkError> {
            Err(SinkError::Write {
                sink: "disk",
                source: std::io::Error::new(std::io::ErrorKind::Other, "no space"),
            })
        }
    }

    let run = || -> anyhow::Result<String> { Ok(GreeterService::new(Full).greet("World")?) };
    let err = run().unwrap_err();
    assert_eq!(err.to_string(), "failed to write line to disk");
    assert!(err.downcast_ref::<SinkError>().is_some());
}
