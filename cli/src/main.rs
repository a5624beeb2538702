mod commands;
mod report;
mod session;
mod terminal;

use commands::{CommandLine, Commands, find, pattern, solve};
use combi_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg: Config = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Find => {
            print::header("combination finder", cfg.quiet);
            find::find(&cfg).await
        }
        Commands::Solve { length, total } => {
            print::header("searching combinations", cfg.quiet);
            solve::solve(length, total, &cfg).await
        }
        Commands::Pattern { size } => {
            print::header("pattern printer", cfg.quiet);
            pattern::pattern(size)
        }
    }
}
