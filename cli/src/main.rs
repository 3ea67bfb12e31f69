mod commands;
mod terminal;

use commands::{CommandLine, Commands, add, demo, greet, info};
use greeter_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init_logging();
    print::banner(&cfg);

    match commands.command {
        Commands::Greet { name } => {
            print::header("greeting", &cfg);
            greet::greet(&name, &cfg)
        }
        Commands::Add { x, y } => {
            print::header("addition", &cfg);
            add::add(x, y, &cfg)
        }
        Commands::Demo => {
            print::header("running demo", &cfg);
            demo::demo(&cfg)
        }
        Commands::Info => {
            print::header("about the tool", &cfg);
            info::info(&cfg)
        }
    }
}
