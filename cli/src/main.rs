//! Omnibar command line
//!
//! Prints where each query would lead: a web link, a deep link or a search.

mod cli;
mod output;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    omnibar_core::init_logging();

    cli::run(cli::Cli::parse())
}
