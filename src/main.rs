//! azp-bump CLI entry point

use azp_bump::cli::args::Cli;
use azp_bump::cli::bump::run_bump;
use azp_bump::cli::common::init_logging;
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    process::exit(run_bump(&cli));
}
