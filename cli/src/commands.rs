pub mod add;
pub mod demo;
pub mod greet;
pub mod info;

use clap::{ArgAction, Parser, Subcommand};
use greeter_common::config::Config;
use greeter_core::domain::operand::Operand;

#[derive(Parser)]
#[command(name = "greeter")]
#[command(version, about = "Greets people and adds numbers.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print less; repeat (-qq) to print only results
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Skip the start-up banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Greet someone by name
    #[command(alias = "g")]
    Greet {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    /// Add two numbers, replacing any earlier result
    #[command(alias = "a")]
    Add {
        #[arg(allow_negative_numbers = true)]
        x: Operand,
        #[arg(allow_negative_numbers = true)]
        y: Operand,
    },
    /// Run the sample session: add 5 and 3, then greet the world
    #[command(alias = "d")]
    Demo,
    /// Show information about the tool
    #[command(alias = "i")]
    Info,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
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
