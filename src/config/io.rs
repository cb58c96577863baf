// src/config/io.rs
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::types::ItemReportToml;
use super::{Config, CONFIG_FILE};

/// Loads `itemreport.toml` from `dir` if it exists. A file that fails to
/// parse is reported and ignored.
pub fn load_toml_config(config: &mut Config, dir: &Path) {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return;
    }
    match fs::read_to_string(&path) {
        Ok(content) => {
            if let Err(e) = parse_toml(config, &content) {
                warn!(path = %path.display(), "ignoring config: {e:#}");
            } else {
                debug!(path = %path.display(), "config loaded");
            }
        }
        Err(e) => warn!(path = %path.display(), "cannot read config: {e}"),
    }
}

/// Parses TOML content and applies it to `config`.
///
/// # Errors
/// Returns error if the content is not valid TOML for the config schema.
pub fn parse_toml(config: &mut Config, content: &str) -> Result<()> {
    let parsed: ItemReportToml = toml::from_str(content).context("invalid itemreport.toml")?;
    config.defaults = parsed.defaults;
    Ok(())
}

/// Writes `config` to `itemreport.toml` in `dir`.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn save_to_file(config: &Config, dir: &Path) -> Result<()> {
    let toml = ItemReportToml {
        defaults: config.defaults.clone(),
    };
    let content = toml::to_string_pretty(&toml)?;
    let path = dir.join(CONFIG_FILE);
    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
