use caravan_common::config::Config;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "caravan")]
#[command(version)]
#[command(about = "Times a caravan of cars through a chain of toll gates.")]
pub struct CommandLine {
    /// Hide the banner and section headers
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// Hide the start-up banner only
    #[arg(long)]
    pub no_banner: bool,
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
    /// Show diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            no_color: self.no_color,
            quiet: self.quiet,
        }
    }
}
