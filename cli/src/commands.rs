use clap::{ArgAction, Parser};
use vls_common::config::{Config, DEFAULT_NAME};

#[derive(Parser)]
#[command(name = "hello")]
#[command(about = "Builds a car and hands it off to be named.")]
pub struct CommandLine {
    /// Name of the car
    #[arg(short, long, default_value = DEFAULT_NAME)]
    pub name: String,

    /// Take the car for a drive before handing it off
    #[arg(short, long)]
    pub drive: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Config {
        Config {
            name: self.name,
            drive: self.drive,
            verbosity: self.verbose,
            quiet: self.quiet,
        }
    }
}
