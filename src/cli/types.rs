use clap::Parser;
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "htmltoc")]
#[command(
    about = "Adds anchor ids to HTML headings and inserts a table of contents",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Document to process (defaults to ./vknotes.html)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Write the result to FILE instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Custom configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<Vec<PathBuf>>,

    /// Text identifying the document title heading
    #[arg(long, value_name = "TEXT")]
    pub title_marker: Option<String>,

    /// Text identifying the table of contents heading
    #[arg(long, value_name = "TEXT")]
    pub toc_marker: Option<String>,

    /// Silence everything but errors
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}
