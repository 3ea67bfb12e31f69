use colored::*;
use greeter_common::config::Config;

use crate::mprint;
use crate::terminal::{colors, print};

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    print::print(&format!(
        "{}",
        "Greeter says hello and adds two numbers.".color(colors::TEXT_DEFAULT)
    ));
    mprint!();
    print::GLOBAL_KEY_WIDTH.set(10);

    print::aligned_line("Version", env!("CARGO_PKG_VERSION"));
    print::aligned_line("Output", "results on stdout, everything else on stderr");
    print::aligned_line("Logging", "set RUST_LOG=debug for service events");

    print::header("commands", cfg);
    print::aligned_line("greet", "Hello, <name>!");
    print::aligned_line("add", "<x> + <y>, overwrites the last result");
    print::aligned_line("demo", "add 5 3, then greet World");

    print::end_of_program(cfg);
    Ok(())
}
