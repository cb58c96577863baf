use serde::{Deserialize, Serialize};

/// Parsed contents of `itemreport.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReportToml {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Values used when the command line leaves them out.
///
/// Kept as raw text; report type and role are validated when a report is generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_role")]
    pub role: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            format: default_format(),
            user: default_user(),
            role: default_role(),
        }
    }
}

fn default_format() -> String { "CSV".to_string() }
fn default_user() -> String { "anonymous".to_string() }
fn default_role() -> String { "USER".to_string() }

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub defaults: Defaults,
}
