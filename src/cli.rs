//! Command-line definitions shared by the binary and its tests.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Log filter while the terminal UI owns the screen.
///
/// Log lines written to stderr would be drawn over the interface.
pub const TUI_LOG_FILTER: &str = "off";

/// lifeorg - search notes, tasks and events from the terminal
#[derive(Debug, Parser)]
#[command(name = "lifeorg")]
#[command(about = "A personal organizer for notes, tasks and events")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search records by text, type and category
    Search(SearchCommand),
    /// Show dashboard counts and upcoming events
    Summary(SummaryCommand),
    /// Launch interactive terminal UI
    Tui(TuiCommand),
}

impl Commands {
    /// Picks the log filter for this command.
    ///
    /// Line-oriented commands use `configured`; the terminal UI is silenced.
    pub fn log_filter<'a>(&self, configured: &'a str) -> &'a str {
        match self {
            Self::Tui(_) => TUI_LOG_FILTER,
            Self::Search(_) | Self::Summary(_) => configured,
        }
    }
}

/// Search records
#[derive(Debug, Parser)]
pub struct SearchCommand {
    /// Text matched against titles, bodies and tags
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Record type: all, note, task or event
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Category: All, Work, Personal, Learning or Health
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// List pinned notes before other results
    #[arg(long)]
    pub pinned_first: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// JSON record file to search instead of the default
    #[arg(short, long, value_name = "FILE")]
    pub records: Option<PathBuf>,
}

/// Show dashboard counts
#[derive(Debug, Parser)]
pub struct SummaryCommand {
    /// JSON record file to summarize instead of the default
    #[arg(short, long, value_name = "FILE")]
    pub records: Option<PathBuf>,
}

/// Launch the terminal UI
#[derive(Debug, Parser)]
pub struct TuiCommand {
    /// JSON record file to browse instead of the default
    #[arg(short, long, value_name = "FILE")]
    pub records: Option<PathBuf>,
}
