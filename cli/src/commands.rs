pub mod find;
pub mod pattern;
pub mod solve;

use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser, Subcommand};
use combi_common::config::Config;

#[derive(Parser)]
#[command(name = "combi")]
#[command(about = "Finds sets of distinct digits that add up to a total.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Hide headers (repeat for less output)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Produce combinations on a separate task and hand them over through a channel
    #[arg(long, global = true)]
    pub channelled: bool,

    /// Channel capacity used with --channelled
    #[arg(
        long,
        default_value_t = 1,
        global = true,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub capacity: usize,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Ask for a length and a total until `done` is entered
    #[command(alias = "f")]
    Find,
    /// Print every combination of LENGTH distinct digits adding up to TOTAL
    #[command(alias = "s")]
    Solve {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        length: u64,
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        total: u64,
    },
    /// Print an inverted triangle of asterisks
    #[command(alias = "p")]
    Pattern {
        #[arg(allow_negative_numbers = true)]
        size: Option<i64>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
            channelled: self.channelled,
            capacity: self.capacity,
        }
    }
}
