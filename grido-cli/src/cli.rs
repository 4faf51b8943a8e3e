//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;

/// Renders the demo order grid and serves grid requests against it.
#[derive(Parser, Debug)]
#[command(name = "grido", version, about = "Inline-editable data grid demo")]
pub struct CliArgs {
    /// JSON grid config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Request query to dispatch after rendering, e.g.
    /// `do=orders-columns-status-editable&orders-columns-status-id=1&...`
    #[arg(short, long, value_name = "QUERY")]
    pub query: Vec<String>,

    /// Send the queries as regular (non-AJAX) requests
    #[arg(long)]
    pub plain: bool,

    /// Write the log to this file instead of the terminal
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Skip rendering the grid
    #[arg(long)]
    pub no_render: bool,
}

/// Log level from the `GRIDO_LOG` environment variable; `warn` when unset or
/// unrecognized.
pub fn log_level() -> LevelFilter {
    std::env::var("GRIDO_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}
