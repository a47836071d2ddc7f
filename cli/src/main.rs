mod commands;
mod terminal;

use std::io;

use anyhow::Context;
use caravan_common::config::Config;
use commands::CommandLine;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;
    let cfg: Config = commands.to_config();
    print::initialize(&cfg);

    print::banner(&cfg);
    print::header("journey parameters", &cfg);

    let outcome = caravan_core::run_session(io::stdin().lock(), io::stdout().lock())
        .context("caravan session aborted")?;

    print::summary(&outcome, &cfg);
    print::end_of_program(&cfg);
    Ok(())
}
