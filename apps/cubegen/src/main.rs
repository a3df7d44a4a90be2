use anyhow::Result;
use clap::Parser;

mod cli;
mod fs_sink;
mod manifest;

fn main() -> Result<()> {
    cli::run(cli::Cli::parse())
}
