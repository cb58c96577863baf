// src/bin/itemreport.rs
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use itemreport_core::cli::handlers;
use itemreport_core::cli::{Cli, Commands};
use itemreport_core::config::Config;
use itemreport_core::exit::ReportExit;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match dispatch(&cli) {
        Ok(code) => code.exit(),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ReportExit::for_error(&e).exit();
        }
    }
}

fn setup_logging(verbose: u8) {
    let filter = EnvFilter::try_from_env("ITEMREPORT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(cli: &Cli) -> Result<ReportExit> {
    match &cli.command {
        Commands::Render(args) => handlers::handle_render(args, &Config::load()),
        Commands::Init { force } => handlers::handle_init(Path::new("."), *force),
    }
}
