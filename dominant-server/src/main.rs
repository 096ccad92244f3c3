use anyhow::Result;
use clap::Parser;

use dominant_server::{config::Args, logger::init_logger, server};

fn main() -> Result<()> {
    let config = Args::parse().into_config()?;

    init_logger(&config.logger)?;

    server::run(config)
}
