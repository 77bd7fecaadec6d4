// src/bin/linkrank.rs
use clap::Parser;
use colored::Colorize;
use linkrank_core::cli::{self, Cli};
use linkrank_core::exit::LinkRankExit;
use linkrank_core::logging;

fn main() -> LinkRankExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli::handle_rank(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            LinkRankExit::for_error(&e)
        }
    }
}
