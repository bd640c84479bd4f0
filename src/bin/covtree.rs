//! covtree CLI Binary

use anyhow::Context;
use clap::Parser;
use covtree::logging::init_logging;
use covtree::tooling::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let context = CliContext::new(cli.workspace.clone(), cli.config.clone())
        .context("loading configuration")?;

    let logging = cli.logging_config(&context.config().logging);
    init_logging(Some(&logging)).context("initializing logging")?;

    let output = context
        .execute(&cli.command)
        .context("command failed")?;
    println!("{}", output);
    Ok(())
}
