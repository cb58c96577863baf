// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{Config, Defaults, ItemReportToml};
use anyhow::Result;
use std::path::Path;

pub const CONFIG_FILE: &str = "itemreport.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new config and applies `itemreport.toml` from the working directory.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new("."))
    }

    /// Creates a new config and applies `itemreport.toml` from `dir`.
    #[must_use]
    pub fn load_from(dir: &Path) -> Self {
        let mut config = Self::new();
        io::load_toml_config(&mut config, dir);
        config
    }

    /// # Errors
    /// Returns error if the content is not a valid config.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        io::parse_toml(self, content)
    }

    /// Saves the current configuration to `itemreport.toml` in `dir`.
    ///
    /// # Errors
    /// Returns error if file write fails.
    pub fn save(&self, dir: &Path) -> Result<()> {
        io::save_to_file(self, dir)
    }
}
