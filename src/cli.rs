/// Command-line arguments.
use clap::Parser;
use std::path::PathBuf;

/// Log file written next to the working directory unless overridden.
pub const DEFAULT_LOG_FILE: &str = "html_renamer.log";

#[derive(Parser, Debug)]
#[command(
    name = "HtmlRenamer",
    version,
    about = "Rename .html files after their <h1 class=\"panel__title\"> heading"
)]
pub struct Cli {
    /// Directory to process without opening the window.
    pub directory: Option<PathBuf>,

    /// Prefix new names with "1. ", "2. ", ... in creation-date order.
    #[arg(long)]
    pub index: bool,

    /// Skip the confirmation prompt (headless mode only).
    #[arg(short = 'y', long, requires = "directory")]
    pub yes: bool,

    /// Write the run report to FILE (.json for JSON, anything else CSV).
    #[arg(long, value_name = "FILE", requires = "directory")]
    pub export: Option<PathBuf>,

    /// Append log output to FILE.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}
