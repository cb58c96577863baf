use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "itemreport", version, about = "Render line items as CSV or HTML reports")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a report from a JSON array of items
    Render(RenderArgs),
    /// Write itemreport.toml with the default settings
    Init {
        /// Overwrite an existing itemreport.toml
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Report type: CSV or HTML
    #[arg(long, short)]
    pub format: Option<String>,
    /// Name of the user the report is for
    #[arg(long, short)]
    pub user: Option<String>,
    /// Role of the user: ADMIN or USER
    #[arg(long, short)]
    pub role: Option<String>,
    /// Read items from FILE instead of stdin
    #[arg(long, short, value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Print the included count and total to stderr
    #[arg(long)]
    pub summary: bool,
}
