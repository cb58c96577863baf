// src/cli/handlers.rs
use crate::cli::args::RenderArgs;
use crate::config::{Config, CONFIG_FILE};
use crate::exit::ReportExit;
use crate::report::ReportGenerator;
use crate::types::{Item, User};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::info;

/// Handles the render command.
///
/// # Errors
/// Returns error if the items cannot be read or the report type or role is invalid.
pub fn handle_render(args: &RenderArgs, config: &Config) -> Result<ReportExit> {
    let raw = read_input(args.input.as_deref())?;
    let items = parse_items(&raw)?;

    let format = args.format.as_deref().unwrap_or(&config.defaults.format);
    let user = User::new(
        args.user.as_deref().unwrap_or(&config.defaults.user),
        args.role.as_deref().unwrap_or(&config.defaults.role),
    );
    info!(format, user = %user.name, role = %user.role, items = items.len(), "rendering");

    let report = ReportGenerator::new(()).render(format, &user, &items)?;
    println!("{}", report.text);

    if args.summary {
        eprintln!(
            "{} {} of {} items, total {}",
            "✓".green().bold(),
            report.included,
            items.len(),
            report.total.to_string().bold()
        );
    }
    Ok(ReportExit::Success)
}

/// Handles the init command.
///
/// # Errors
/// Returns error if the config exists and `force` is unset, or the write fails.
pub fn handle_init(dir: &Path, force: bool) -> Result<ReportExit> {
    if dir.join(CONFIG_FILE).exists() && !force {
        bail!("{CONFIG_FILE} already exists (use --force to overwrite)");
    }
    Config::new().save(dir)?;
    println!("{} wrote {CONFIG_FILE}", "✓".green().bold());
    Ok(ReportExit::Success)
}

/// Parses a JSON array of items.
///
/// # Errors
/// Returns error if the text is not a JSON array of items.
pub fn parse_items(raw: &str) -> Result<Vec<Item>> {
    serde_json::from_str(raw).context("expected a JSON array of items")
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display())),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
